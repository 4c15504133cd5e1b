use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

/// Point of a frequency-to-power curve.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct V2xFreqWattPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub frequency: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub power: Decimal,
}

impl V2xFreqWattPoint {
    pub fn new(frequency: Decimal, power: Decimal) -> Self {
        Self {
            custom_data: None,
            frequency,
            power,
        }
    }
}
