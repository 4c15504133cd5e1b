use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct EnterService {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub high_voltage: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub low_voltage: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub high_freq: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub low_freq: Decimal,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub delay: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub random_delay: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ramp_rate: Option<Decimal>,
}

impl EnterService {
    pub fn new(
        priority: i32,
        high_voltage: Decimal,
        low_voltage: Decimal,
        high_freq: Decimal,
        low_freq: Decimal,
    ) -> Result<Self, ModelError> {
        Self {
            priority,
            high_voltage,
            low_voltage,
            high_freq,
            low_freq,
            ..Default::default()
        }
        .validated()
    }
}
