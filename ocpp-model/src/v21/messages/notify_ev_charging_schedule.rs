use chrono::{DateTime, Utc};
use validator::Validate;

use super::super::types::{ChargingSchedule, CustomData, GenericStatus, StatusInfo};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyEvChargingScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub time_base: DateTime<Utc>,
    #[validate(nested)]
    pub charging_schedule: ChargingSchedule,
    #[validate(range(min = 1))]
    pub evse_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub selected_charging_schedule_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_tolerance_acceptance: Option<bool>,
}

impl NotifyEvChargingScheduleRequest {
    pub fn new(
        time_base: DateTime<Utc>,
        charging_schedule: ChargingSchedule,
        evse_id: i32,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            time_base,
            charging_schedule,
            evse_id,
            selected_charging_schedule_id: None,
            power_tolerance_acceptance: None,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyEvChargingScheduleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: GenericStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl NotifyEvChargingScheduleResponse {
    pub fn new(status: GenericStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
