use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct V2xSignalWattPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub signal: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub power: Decimal,
}

impl V2xSignalWattPoint {
    pub fn new(signal: i32, power: Decimal) -> Self {
        Self {
            custom_data: None,
            signal,
            power,
        }
    }
}
