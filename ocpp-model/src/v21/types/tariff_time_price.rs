use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, TariffConditions};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TariffTimePrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Price per minute.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub price_minute: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub conditions: Option<TariffConditions>,
}

impl TariffTimePrice {
    pub fn new(price_minute: Decimal) -> Self {
        Self {
            price_minute,
            ..Default::default()
        }
    }
}
