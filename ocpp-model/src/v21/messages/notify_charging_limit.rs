use validator::Validate;

use super::super::types::{ChargingLimit, ChargingSchedule, CustomData};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyChargingLimitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub charging_schedule: Option<Vec<ChargingSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub evse_id: Option<i32>,
    #[validate(nested)]
    pub charging_limit: ChargingLimit,
}

impl NotifyChargingLimitRequest {
    pub fn new(charging_limit: ChargingLimit) -> Self {
        Self {
            custom_data: None,
            charging_schedule: None,
            evse_id: None,
            charging_limit,
        }
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct NotifyChargingLimitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
