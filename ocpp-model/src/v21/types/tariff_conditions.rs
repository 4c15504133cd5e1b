use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, DayOfWeek, EvseKind};

/// Restrictions under which a price element applies. All of them must hold.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TariffConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Local time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 7))]
    pub day_of_week: Option<Vec<DayOfWeek>>,
    /// Local date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evse_kind: Option<EvseKind>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_energy: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_energy: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_current: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_current: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_power: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_power: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_charging_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_charging_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_idle_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_time: Option<i32>,
}
