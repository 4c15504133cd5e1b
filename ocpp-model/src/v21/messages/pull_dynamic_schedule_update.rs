use validator::Validate;

use super::super::types::{ChargingProfileStatus, ChargingScheduleUpdate, CustomData, StatusInfo};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PullDynamicScheduleUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub charging_profile_id: i32,
}

impl PullDynamicScheduleUpdateRequest {
    pub fn new(charging_profile_id: i32) -> Self {
        Self {
            custom_data: None,
            charging_profile_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PullDynamicScheduleUpdateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: ChargingProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub schedule_update: Option<ChargingScheduleUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl PullDynamicScheduleUpdateResponse {
    pub fn new(status: ChargingProfileStatus) -> Self {
        Self {
            custom_data: None,
            status,
            schedule_update: None,
            status_info: None,
        }
    }
}
