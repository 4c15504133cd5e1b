use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, DerUnit};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FixedVar {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub setpoint: Decimal,
    pub unit: DerUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Decimal>,
}

impl FixedVar {
    pub fn new(priority: i32, setpoint: Decimal, unit: DerUnit) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            priority,
            setpoint,
            unit,
            start_time: None,
            duration: None,
        }
        .validated()
    }
}
