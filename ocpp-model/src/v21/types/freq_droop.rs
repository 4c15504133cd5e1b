use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct FreqDroop {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub over_freq: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub under_freq: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub over_droop: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub under_droop: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub response_time: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Decimal>,
}

impl FreqDroop {
    pub fn new(
        priority: i32,
        over_freq: Decimal,
        under_freq: Decimal,
        over_droop: Decimal,
        under_droop: Decimal,
        response_time: Decimal,
    ) -> Result<Self, ModelError> {
        Self {
            priority,
            over_freq,
            under_freq,
            over_droop,
            under_droop,
            response_time,
            ..Default::default()
        }
        .validated()
    }
}
