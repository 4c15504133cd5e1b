use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TotalUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub energy: Decimal,
    /// Seconds.
    pub charging_time: i32,
    pub idle_time: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<i32>,
}

impl TotalUsage {
    pub fn new(energy: Decimal, charging_time: i32, idle_time: i32) -> Self {
        Self {
            energy,
            charging_time,
            idle_time,
            ..Default::default()
        }
    }
}
