use chrono::{DateTime, Utc};
use validator::Validate;

use super::super::types::{CustomData, DerControl, GridEventFault};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyDerAlarmRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub control_type: DerControl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_event_fault: Option<GridEventFault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_ended: Option<bool>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub extra_info: Option<String>,
}

impl NotifyDerAlarmRequest {
    pub fn new(control_type: DerControl, timestamp: DateTime<Utc>) -> Self {
        Self {
            custom_data: None,
            control_type,
            grid_event_fault: None,
            alarm_ended: None,
            timestamp,
            extra_info: None,
        }
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct NotifyDerAlarmResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
