use validator::Validate;

use super::super::types::{ChargingProfileStatus, ChargingScheduleUpdate, CustomData, StatusInfo};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDynamicScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub charging_profile_id: i32,
    #[validate(nested)]
    pub schedule_update: ChargingScheduleUpdate,
}

impl UpdateDynamicScheduleRequest {
    pub fn new(
        charging_profile_id: i32,
        schedule_update: ChargingScheduleUpdate,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            charging_profile_id,
            schedule_update,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDynamicScheduleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: ChargingProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl UpdateDynamicScheduleResponse {
    pub fn new(status: ChargingProfileStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
