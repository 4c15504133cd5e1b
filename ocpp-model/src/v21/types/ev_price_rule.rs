use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct EvPriceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub energy_fee: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub power_range_start: Decimal,
}

impl EvPriceRule {
    pub fn new(energy_fee: Decimal, power_range_start: Decimal) -> Self {
        Self {
            energy_fee,
            power_range_start,
            ..Default::default()
        }
    }
}
