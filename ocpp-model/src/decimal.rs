//! Decimal fields are decoded from the literal JSON text and rejected when a `Decimal` cannot
//! hold them exactly.

use rust_decimal::Decimal;
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Number;

/// Prefix of the decode error raised for a number without an exact `Decimal` form.
pub(crate) const INEXACT: &str = "inexact decimal `";

pub(crate) fn exact<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    parse(&number.to_string()).map_err(D::Error::custom)
}

pub(crate) fn exact_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Number>::deserialize(deserializer)? {
        Some(number) => parse(&number.to_string())
            .map(Some)
            .map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Parses a JSON number literal without rounding.
pub(crate) fn parse(text: &str) -> Result<Decimal, String> {
    let parsed = match text.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => scientific(mantissa, exponent),
        None => Decimal::from_str_exact(text).ok(),
    };
    parsed.ok_or_else(|| format!("{INEXACT}{text}`"))
}

fn scientific(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    let scale = i64::from(value.scale()) - exponent;
    if scale >= 0 {
        value.set_scale(u32::try_from(scale).ok()?).ok()?;
        return Some(value);
    }
    value.set_scale(0).ok()?;
    // a non-zero mantissa overflows within 29 steps
    for _ in 0..scale.unsigned_abs().min(29) {
        value = value.checked_mul(Decimal::TEN)?;
    }
    Some(value)
}
