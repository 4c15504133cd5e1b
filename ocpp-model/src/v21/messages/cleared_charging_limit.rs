use validator::Validate;

use super::super::types::CustomData;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearedChargingLimitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 20))]
    pub charging_limit_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub evse_id: Option<i32>,
}

impl ClearedChargingLimitRequest {
    pub fn new(charging_limit_source: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            charging_limit_source: charging_limit_source.into(),
            evse_id: None,
        }
        .validated()
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct ClearedChargingLimitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
