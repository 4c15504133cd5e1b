use validator::Validate;

use super::super::types::{CustomData, StatusInfo, TariffAssignment, TariffGetStatus};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetTariffsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
}

impl GetTariffsRequest {
    pub fn new(evse_id: i32) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            evse_id,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetTariffsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: TariffGetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub tariff_assignments: Option<Vec<TariffAssignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl GetTariffsResponse {
    pub fn new(status: TariffGetStatus) -> Self {
        Self {
            custom_data: None,
            status,
            tariff_assignments: None,
            status_info: None,
        }
    }
}
