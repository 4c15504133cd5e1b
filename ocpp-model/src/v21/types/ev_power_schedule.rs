use chrono::{DateTime, Utc};
use validator::Validate;

use super::{CustomData, EvPowerScheduleEntry};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvPowerSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(min = 1, max = 1024), nested)]
    pub ev_power_schedule_entries: Vec<EvPowerScheduleEntry>,
    pub time_anchor: DateTime<Utc>,
}

impl EvPowerSchedule {
    pub fn new(
        ev_power_schedule_entries: Vec<EvPowerScheduleEntry>,
        time_anchor: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            ev_power_schedule_entries,
            time_anchor,
        }
        .validated()
    }
}
