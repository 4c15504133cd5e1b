use validator::Validate;

use super::super::types::{
    ChargingRateUnit, CompositeSchedule, CustomData, GenericStatus, StatusInfo,
};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetCompositeScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_rate_unit: Option<ChargingRateUnit>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
}

impl GetCompositeScheduleRequest {
    pub fn new(duration: i32, evse_id: i32) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            duration,
            charging_rate_unit: None,
            evse_id,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetCompositeScheduleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: GenericStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub schedule: Option<CompositeSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl GetCompositeScheduleResponse {
    pub fn new(status: GenericStatus) -> Self {
        Self {
            custom_data: None,
            status,
            schedule: None,
            status_info: None,
        }
    }
}
