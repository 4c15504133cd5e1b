use chrono::{DateTime, Utc};
use validator::Validate;

use super::{CustomData, EvAbsolutePriceScheduleEntry};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvAbsolutePriceSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub time_anchor: DateTime<Utc>,
    #[validate(length(max = 3))]
    pub currency: String,
    #[validate(length(min = 1, max = 1024), nested)]
    pub ev_absolute_price_schedule_entries: Vec<EvAbsolutePriceScheduleEntry>,
    #[validate(length(max = 2000))]
    pub price_algorithm: String,
}

impl EvAbsolutePriceSchedule {
    pub fn new(
        time_anchor: DateTime<Utc>,
        currency: impl Into<String>,
        ev_absolute_price_schedule_entries: Vec<EvAbsolutePriceScheduleEntry>,
        price_algorithm: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            time_anchor,
            currency: currency.into(),
            ev_absolute_price_schedule_entries,
            price_algorithm: price_algorithm.into(),
        }
        .validated()
    }
}
