use rocpp_model::v21::types::{
    ChargingProfile, ChargingProfileKind, ChargingProfilePurpose, ChargingSchedulePeriod, Cost,
    CostKind, DcChargingParameters, LimitAtSoc,
};
use rocpp_model::{Decimal, Model, ModelError, Rule};

use crate::harness::{
    fixtures,
    harness::{init_logger, violation},
};

fn profile_with_stack_level(stack_level: i32) -> Result<ChargingProfile, ModelError> {
    ChargingProfile::new(
        1,
        stack_level,
        ChargingProfilePurpose::TxProfile,
        ChargingProfileKind::Relative,
        vec![fixtures::schedule(
            1,
            vec![ChargingSchedulePeriod::with_limit(0, fixtures::limit_11kw())],
        )?],
    )
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert!(profile_with_stack_level(0).is_ok());
    assert!(profile_with_stack_level(i32::MAX).is_ok());
    let err = violation(profile_with_stack_level(-1));
    assert_eq!(err.field(), Some("stackLevel"));
    assert!(matches!(
        &err,
        ModelError::ConstraintViolation { value, rule: Rule::Range { .. }, .. } if value == "-1"
    ));

    assert!(LimitAtSoc::new(0, Decimal::ZERO).is_ok());
    assert!(LimitAtSoc::new(100, Decimal::ZERO).is_ok());
    assert_eq!(violation(LimitAtSoc::new(101, Decimal::ZERO)).field(), Some("soc"));
    assert_eq!(violation(LimitAtSoc::new(-1, Decimal::ZERO)).field(), Some("soc"));

    let mut cost = Cost::new(CostKind::RelativePricePercentage, 120);
    for multiplier in [-3, 0, 3] {
        cost.amount_multiplier = Some(multiplier);
        assert!(cost.is_valid(), "{multiplier}");
    }
    for multiplier in [-4, 4] {
        cost.amount_multiplier = Some(multiplier);
        assert_eq!(violation(cost.check()).field(), Some("amountMultiplier"));
    }

    let mut dc = DcChargingParameters::new(Decimal::from(200), Decimal::from(800));
    dc.full_soc = Some(100);
    dc.bulk_soc = Some(0);
    assert!(dc.is_valid());
    dc.full_soc = Some(101);
    assert_eq!(violation(dc.check()).field(), Some("fullSoC"));

    let mut period = ChargingSchedulePeriod::new(0);
    period.number_phases = Some(3);
    period.phase_to_use = Some(0);
    assert!(period.is_valid());
    period.number_phases = Some(4);
    assert_eq!(violation(period.check()).field(), Some("numberPhases"));

    // discharge limits are non-positive magnitudes
    let mut period = ChargingSchedulePeriod::new(0);
    period.discharge_limit = Some(Decimal::ZERO);
    period.discharge_limit_l3 = Some(Decimal::new(-5, 0));
    assert!(period.is_valid());
    period.discharge_limit_l3 = Some(Decimal::new(1, 1));
    let err = violation(period.validated());
    assert_eq!(err.field(), Some("dischargeLimit_L3"));

    // text lengths count characters
    let mut profile = profile_with_stack_level(0)?;
    profile.transaction_id = Some("t".repeat(36));
    assert!(profile.is_valid());
    profile.transaction_id = Some("t".repeat(37));
    let err = violation(profile.check());
    assert_eq!(err.field(), Some("transactionId"));
    assert_eq!(
        err.rule(),
        Some(&Rule::Length {
            min: None,
            max: Some(36)
        })
    );

    let mut schedule = fixtures::schedule(1, vec![ChargingSchedulePeriod::new(0)])?;
    schedule.digest_value = Some("é".repeat(88));
    assert!(schedule.is_valid());
    schedule.digest_value = Some("é".repeat(89));
    assert_eq!(violation(schedule.check()).field(), Some("digestValue"));
    Ok(())
}
