use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, TariffConditionsFixed};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TariffFixedPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub conditions: Option<TariffConditionsFixed>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub price_fixed: Decimal,
}

impl TariffFixedPrice {
    pub fn new(price_fixed: Decimal) -> Self {
        Self {
            price_fixed,
            ..Default::default()
        }
    }
}
