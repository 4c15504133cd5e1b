use validator::Validate;

use super::super::types::{CustomData, PriorityChargingStatus, StatusInfo};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsePriorityChargingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 36))]
    pub transaction_id: String,
    pub activate: bool,
}

impl UsePriorityChargingRequest {
    pub fn new(transaction_id: impl Into<String>, activate: bool) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            transaction_id: transaction_id.into(),
            activate,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsePriorityChargingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: PriorityChargingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl UsePriorityChargingResponse {
    pub fn new(status: PriorityChargingStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
