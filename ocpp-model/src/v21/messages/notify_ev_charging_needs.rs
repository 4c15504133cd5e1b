use chrono::{DateTime, Utc};
use validator::Validate;

use super::super::types::{ChargingNeeds, CustomData, NotifyEvChargingNeedsStatus, StatusInfo};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyEvChargingNeedsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub charging_needs: ChargingNeeds,
    #[validate(range(min = 1))]
    pub evse_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_schedule_tuples: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NotifyEvChargingNeedsRequest {
    pub fn new(charging_needs: ChargingNeeds, evse_id: i32) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            charging_needs,
            evse_id,
            max_schedule_tuples: None,
            timestamp: None,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyEvChargingNeedsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: NotifyEvChargingNeedsStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl NotifyEvChargingNeedsResponse {
    pub fn new(status: NotifyEvChargingNeedsStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
