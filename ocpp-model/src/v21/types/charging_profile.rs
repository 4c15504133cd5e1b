use chrono::{DateTime, Utc};
use validator::Validate;

use super::{
    ChargingProfileKind, ChargingProfilePurpose, ChargingSchedule, CustomData, RecurrencyKind,
};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChargingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub id: i32,
    #[validate(range(min = 0))]
    pub stack_level: i32,
    pub charging_profile_purpose: ChargingProfilePurpose,
    pub charging_profile_kind: ChargingProfileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrency_kind: Option<RecurrencyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    /// Only meaningful for `TxProfile`; not cross-checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 36))]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_offline_duration: Option<i32>,
    #[validate(length(min = 1, max = 3), nested)]
    pub charging_schedule: Vec<ChargingSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_after_offline_duration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dyn_update_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dyn_update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 256))]
    pub price_schedule_signature: Option<String>,
}

impl ChargingProfile {
    pub fn new(
        id: i32,
        stack_level: i32,
        charging_profile_purpose: ChargingProfilePurpose,
        charging_profile_kind: ChargingProfileKind,
        charging_schedule: Vec<ChargingSchedule>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            id,
            stack_level,
            charging_profile_purpose,
            charging_profile_kind,
            recurrency_kind: None,
            valid_from: None,
            valid_to: None,
            transaction_id: None,
            max_offline_duration: None,
            charging_schedule,
            invalid_after_offline_duration: None,
            dyn_update_interval: None,
            dyn_update_time: None,
            price_schedule_signature: None,
        }
        .validated()
    }

    /// Replaces the schedules, keeping the profile untouched if the new list is rejected.
    pub fn set_charging_schedule(
        &mut self,
        charging_schedule: Vec<ChargingSchedule>,
    ) -> Result<(), ModelError> {
        self.try_update(|profile| profile.charging_schedule = charging_schedule)
    }

    pub fn schedule(&self, id: i32) -> Option<&ChargingSchedule> {
        self.charging_schedule.iter().find(|s| s.id == id)
    }
}
