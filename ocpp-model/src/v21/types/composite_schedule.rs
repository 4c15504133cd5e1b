use chrono::{DateTime, Utc};
use validator::Validate;

use super::{ChargingRateUnit, ChargingSchedulePeriod, CustomData};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompositeSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
    pub duration: i32,
    pub schedule_start: DateTime<Utc>,
    pub charging_rate_unit: ChargingRateUnit,
    #[validate(length(min = 1), nested)]
    pub charging_schedule_period: Vec<ChargingSchedulePeriod>,
}

impl CompositeSchedule {
    pub fn new(
        evse_id: i32,
        duration: i32,
        schedule_start: DateTime<Utc>,
        charging_rate_unit: ChargingRateUnit,
        charging_schedule_period: Vec<ChargingSchedulePeriod>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            evse_id,
            duration,
            schedule_start,
            charging_rate_unit,
            charging_schedule_period,
        }
        .validated()
    }
}
