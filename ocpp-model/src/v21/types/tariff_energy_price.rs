use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, TariffConditions};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TariffEnergyPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Price per kWh.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub price_kwh: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub conditions: Option<TariffConditions>,
}

impl TariffEnergyPrice {
    pub fn new(price_kwh: Decimal) -> Self {
        Self {
            price_kwh,
            ..Default::default()
        }
    }
}
