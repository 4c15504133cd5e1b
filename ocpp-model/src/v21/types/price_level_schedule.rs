use chrono::{DateTime, Utc};
use validator::Validate;

use super::{CustomData, PriceLevelScheduleEntry};
use crate::{Model, ModelError};

/// ISO 15118-20 price level schedule.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceLevelSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(min = 1, max = 100), nested)]
    pub price_level_schedule_entries: Vec<PriceLevelScheduleEntry>,
    pub time_anchor: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub price_schedule_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub price_schedule_description: Option<String>,
    #[validate(range(min = 0))]
    pub number_of_price_levels: i32,
}

impl PriceLevelSchedule {
    pub fn new(
        time_anchor: DateTime<Utc>,
        price_schedule_id: i32,
        number_of_price_levels: i32,
        price_level_schedule_entries: Vec<PriceLevelScheduleEntry>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            price_level_schedule_entries,
            time_anchor,
            price_schedule_id,
            price_schedule_description: None,
            number_of_price_levels,
        }
        .validated()
    }
}
