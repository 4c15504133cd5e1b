use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct DerCurvePoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub x: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub y: Decimal,
}

impl DerCurvePoints {
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }
}
