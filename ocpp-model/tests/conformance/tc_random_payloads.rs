use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseError, TestRunner};
use rocpp_model::format::{json, CodecConfig};
use rocpp_model::v21::types::{
    ChargingProfile, ChargingProfileKind, ChargingProfilePurpose, ChargingRateUnit,
    ChargingSchedule, ChargingSchedulePeriod,
};
use rocpp_model::{Decimal, Model};

use crate::harness::harness::init_logger;

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn period() -> impl Strategy<Value = ChargingSchedulePeriod> {
    (
        0..86_400i32,
        option::of(decimal()),
        option::of(-1..=4i32),
        option::of(decimal()),
        option::of(any::<bool>()),
    )
        .prop_map(|(start_period, limit, number_phases, setpoint, evse_sleep)| {
            ChargingSchedulePeriod {
                start_period,
                limit,
                number_phases,
                setpoint,
                evse_sleep,
                ..ChargingSchedulePeriod::default()
            }
        })
}

fn profile() -> impl Strategy<Value = ChargingProfile> {
    let schedule = (
        any::<i32>(),
        prop::sample::select(ChargingRateUnit::ALL),
        vec(period(), 1..=24),
    )
        .prop_map(|(id, unit, periods)| ChargingSchedule {
            custom_data: None,
            id,
            limit_at_soc: None,
            start_schedule: None,
            duration: None,
            charging_rate_unit: unit,
            min_charging_rate: None,
            power_tolerance: None,
            signature_id: None,
            digest_value: None,
            use_local_time: None,
            charging_schedule_period: periods,
            randomized_delay: None,
            sales_tariff: None,
            absolute_price_schedule: None,
            price_level_schedule: None,
        });
    (
        any::<i32>(),
        -2..100i32,
        prop::sample::select(ChargingProfilePurpose::ALL),
        prop::sample::select(ChargingProfileKind::ALL),
        vec(schedule, 1..=3),
    )
        .prop_map(|(id, stack_level, purpose, kind, schedules)| ChargingProfile {
            custom_data: None,
            id,
            stack_level,
            charging_profile_purpose: purpose,
            charging_profile_kind: kind,
            recurrency_kind: None,
            valid_from: None,
            valid_to: None,
            transaction_id: None,
            max_offline_duration: None,
            charging_schedule: schedules,
            invalid_after_offline_duration: None,
            dyn_update_interval: None,
            dyn_update_time: None,
            price_schedule_signature: None,
        })
}

fn expected_valid(profile: &ChargingProfile) -> bool {
    profile.stack_level >= 0
        && profile
            .charging_schedule
            .iter()
            .flat_map(|s| &s.charging_schedule_period)
            .all(|p| p.number_phases.map_or(true, |n| (0..=3).contains(&n)))
}

fn fail(error: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(error.to_string())
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let mut runner = TestRunner::new(Config {
        cases: 256,
        ..Config::default()
    });
    runner
        .run(&profile(), |profile| {
            prop_assert_eq!(profile.is_valid(), expected_valid(&profile));
            prop_assert_eq!(profile.violations().is_empty(), profile.is_valid());

            let unchecked = CodecConfig::default()
                .with_encode_validation(false)
                .with_decode_validation(false);
            let text = json::encode_with(&profile, &unchecked).map_err(fail)?;
            let decoded: ChargingProfile = json::decode_with(&text, &unchecked).map_err(fail)?;
            prop_assert_eq!(&decoded, &profile);
            prop_assert_eq!(json::encode_with(&decoded, &unchecked).map_err(fail)?, text);
            Ok(())
        })
        .map_err(|e| anyhow::anyhow!("{e}"))
}
