use validator::Validate;

use super::super::types::CustomData;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyPriorityChargingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 36))]
    pub transaction_id: String,
    pub activated: bool,
}

impl NotifyPriorityChargingRequest {
    pub fn new(transaction_id: impl Into<String>, activated: bool) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            transaction_id: transaction_id.into(),
            activated,
        }
        .validated()
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct NotifyPriorityChargingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
