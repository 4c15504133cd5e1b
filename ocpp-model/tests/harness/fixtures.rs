use rocpp_model::v21::types::{
    ChargingProfile, ChargingProfileKind, ChargingProfilePurpose, ChargingRateUnit,
    ChargingSchedule, ChargingSchedulePeriod,
};
use rocpp_model::{Decimal, ModelError};

/// 11000.0, keeping the single fractional digit.
pub fn limit_11kw() -> Decimal {
    Decimal::new(110_000, 1)
}

pub fn schedule(id: i32, periods: Vec<ChargingSchedulePeriod>) -> Result<ChargingSchedule, ModelError> {
    ChargingSchedule::new(id, ChargingRateUnit::Watts, periods)
}

/// Profile id 1, stack level 0, `TxDefaultProfile`, `Absolute`, one schedule (id 1, W) with one
/// period starting at 0 limited to 11000.0.
pub fn tx_default_profile() -> Result<ChargingProfile, ModelError> {
    ChargingProfile::new(
        1,
        0,
        ChargingProfilePurpose::TxDefaultProfile,
        ChargingProfileKind::Absolute,
        vec![schedule(1, vec![ChargingSchedulePeriod::with_limit(0, limit_11kw())])?],
    )
}

pub const TX_DEFAULT_PROFILE_JSON: &str = concat!(
    r#"{"id":1,"stackLevel":0,"chargingProfilePurpose":"TxDefaultProfile","#,
    r#""chargingProfileKind":"Absolute","chargingSchedule":[{"id":1,"chargingRateUnit":"W","#,
    r#""chargingSchedulePeriod":[{"startPeriod":0,"limit":11000.0}]}]}"#
);
