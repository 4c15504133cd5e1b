use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

/// Exact number `value * 10^exponent`, as used by the ISO 15118-20 price schedules.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct RationalNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub exponent: i32,
    pub value: i32,
}

impl RationalNumber {
    pub fn new(exponent: i32, value: i32) -> Self {
        Self {
            custom_data: None,
            exponent,
            value,
        }
    }

    /// `None` if the number does not fit a `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        if self.value == 0 {
            return Some(Decimal::ZERO);
        }
        if self.exponent > 28 {
            return None;
        }
        if self.exponent < 0 {
            return Decimal::try_new(i64::from(self.value), self.exponent.unsigned_abs()).ok();
        }
        let mut out = Decimal::from(self.value);
        for _ in 0..self.exponent {
            out = out.checked_mul(Decimal::TEN)?;
        }
        Some(out)
    }

    /// Shortest representation of `decimal`, if the mantissa fits an `i32`.
    pub fn from_decimal(decimal: Decimal) -> Option<Self> {
        let normalized = decimal.normalize();
        let value = i32::try_from(normalized.mantissa()).ok()?;
        let exponent = -i32::try_from(normalized.scale()).ok()?;
        Some(Self::new(exponent, value))
    }
}
