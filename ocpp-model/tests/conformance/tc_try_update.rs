use rocpp_model::v21::types::{ChargingProfile, ChargingSchedulePeriod};
use rocpp_model::{Decimal, Model};

use crate::harness::{fixtures, harness::init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let original = fixtures::tx_default_profile()?;

    let mut profile = original.clone();
    profile.try_update(|p| {
        p.stack_level = 5;
        p.transaction_id = Some("tx-42".to_owned());
    })?;
    assert_eq!(profile.stack_level, 5);

    let before = profile.clone();
    let err = profile
        .try_update(|p| {
            p.stack_level = 6;
            p.charging_schedule.clear();
        })
        .err()
        .ok_or_else(|| anyhow::anyhow!("accepted an empty schedule list"))?;
    assert_eq!(err.field(), Some("chargingSchedule"));
    assert_eq!(profile, before);

    assert!(profile.set_charging_schedule(Vec::new()).is_err());
    assert_eq!(profile, before);

    let second = fixtures::schedule(
        2,
        vec![
            ChargingSchedulePeriod::with_limit(0, Decimal::from(7400)),
            ChargingSchedulePeriod::with_limit(3600, Decimal::ZERO),
        ],
    )?;
    let mut schedules = profile.charging_schedule.clone();
    schedules.push(second);
    profile.set_charging_schedule(schedules)?;
    assert_eq!(profile.charging_schedule.len(), 2);
    assert!(profile.schedule(2).is_some());
    assert!(profile.schedule(3).is_none());

    let validated: ChargingProfile = original.clone().validated()?;
    assert_eq!(validated, original);
    Ok(())
}
