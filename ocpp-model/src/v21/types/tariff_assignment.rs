use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use super::{CustomData, TariffKind};
use crate::validate::each_max_chars;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "id_token_lengths"))]
pub struct TariffAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 60))]
    pub tariff_id: String,
    pub tariff_kind: TariffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub evse_ids: Option<Vec<i32>>,
    /// Only set for driver specific tariffs.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub id_tokens: Option<Vec<String>>,
}

fn id_token_lengths(assignment: &TariffAssignment) -> Result<(), ValidationError> {
    each_max_chars("idTokens", assignment.id_tokens.as_ref(), 255)
}

impl TariffAssignment {
    pub fn new(tariff_id: impl Into<String>, tariff_kind: TariffKind) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            tariff_id: tariff_id.into(),
            tariff_kind,
            valid_from: None,
            evse_ids: None,
            id_tokens: None,
        }
        .validated()
    }
}
