use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct EvPowerScheduleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub duration: i32,
    /// Negative values mean discharging.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub power: Decimal,
}

impl EvPowerScheduleEntry {
    pub fn new(duration: i32, power: Decimal) -> Self {
        Self {
            duration,
            power,
            ..Default::default()
        }
    }
}
