use validator::{Validate, ValidationError};

use super::super::types::{ClearTariffsResult, CustomData};
use crate::validate::each_max_chars;
use crate::{Model, ModelError};

/// Without `tariffIds` every tariff of the addressed EVSEs is removed.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "tariff_id_lengths"))]
pub struct ClearTariffsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub tariff_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub evse_id: Option<i32>,
}

fn tariff_id_lengths(request: &ClearTariffsRequest) -> Result<(), ValidationError> {
    each_max_chars("tariffIds", request.tariff_ids.as_ref(), 60)
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearTariffsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(min = 1), nested)]
    pub clear_tariffs_result: Vec<ClearTariffsResult>,
}

impl ClearTariffsResponse {
    pub fn new(clear_tariffs_result: Vec<ClearTariffsResult>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            clear_tariffs_result,
        }
        .validated()
    }
}
