use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct FixedPf {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub displacement: Decimal,
    /// `true` when absorbing reactive power.
    pub excitation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Decimal>,
}

impl FixedPf {
    pub fn new(priority: i32, displacement: Decimal, excitation: bool) -> Result<Self, ModelError> {
        Self {
            priority,
            displacement,
            excitation,
            ..Default::default()
        }
        .validated()
    }
}
