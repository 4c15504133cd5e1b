use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, DerCurve};
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct LimitMaxDischarge {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub pct_max_discharge_power: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub power_monitoring_must_trip: Option<DerCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Decimal>,
}

impl LimitMaxDischarge {
    pub fn new(priority: i32) -> Result<Self, ModelError> {
        Self {
            priority,
            ..Default::default()
        }
        .validated()
    }
}
