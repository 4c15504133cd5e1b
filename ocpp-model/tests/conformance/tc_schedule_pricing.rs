use chrono::{TimeZone, Utc};
use rocpp_model::format::json;
use rocpp_model::v21::types::{
    ChargingSchedule, ChargingSchedulePeriod, PriceLevelSchedule, PriceLevelScheduleEntry,
    RelativeTimeInterval, SalesTariff, SalesTariffEntry, SchedulePricing, SchedulePricingRef,
};
use rocpp_model::{Model, ModelError, Rule};

use crate::harness::{
    fixtures,
    harness::{init_logger, violation},
};

fn tariff() -> Result<SalesTariff, ModelError> {
    SalesTariff::new(4, vec![SalesTariffEntry::new(RelativeTimeInterval::new(0))])
}

fn levels() -> anyhow::Result<PriceLevelSchedule> {
    let anchor = Utc
        .with_ymd_and_hms(2025, 1, 1, 6, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("anchor"))?;
    Ok(PriceLevelSchedule::new(
        anchor,
        2,
        4,
        vec![
            PriceLevelScheduleEntry::new(3600, 1)?,
            PriceLevelScheduleEntry::new(0, 3)?,
        ],
    )?)
}

fn base() -> Result<ChargingSchedule, ModelError> {
    fixtures::schedule(1, vec![ChargingSchedulePeriod::new(0)])
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let schedule = base()?.with_pricing(tariff()?);
    assert!(schedule.is_valid());
    assert!(matches!(schedule.pricing(), Some(SchedulePricingRef::SalesTariff(t)) if t.id == 4));
    assert_eq!(
        schedule.pricing().map(|p| p.wire_name()),
        Some("salesTariff")
    );

    // replacing the pricing drops the previous one
    let mut schedule = schedule.with_pricing(levels()?);
    assert!(schedule.sales_tariff.is_none());
    assert!(schedule.is_valid());
    let text = json::encode(&schedule)?;
    assert!(text.contains(r#""priceLevelSchedule":{"#));
    assert!(!text.contains("salesTariff"));

    let decoded: ChargingSchedule = json::decode(&text)?;
    assert_eq!(decoded.pricing().map(|p| p.cloned()), Some(SchedulePricing::PriceLevelSchedule(levels()?)));

    // two wire fields at once
    schedule.sales_tariff = Some(tariff()?);
    let err = violation(schedule.check());
    assert_eq!(err.field(), Some("priceLevelSchedule"));
    assert_eq!(
        err.rule(),
        Some(&Rule::Exclusive {
            fields: "salesTariff, absolutePriceSchedule, priceLevelSchedule".to_owned()
        })
    );
    let both = json::encode_with(
        &schedule,
        &rocpp_model::format::CodecConfig::default().with_encode_validation(false),
    )?;
    assert!(matches!(
        json::decode::<ChargingSchedule>(&both),
        Err(ModelError::ConstraintViolation {
            rule: Rule::Exclusive { .. },
            ..
        })
    ));

    let taken = schedule.take_pricing();
    assert!(matches!(taken, Some(SchedulePricing::SalesTariff(_))));
    assert!(schedule.pricing().is_none());
    assert_eq!(schedule, base()?);

    schedule.set_pricing(Some(SchedulePricing::from(levels()?)));
    assert_eq!(schedule.pricing().map(|p| p.wire_name()), Some("priceLevelSchedule"));
    schedule.set_pricing(None);
    assert!(schedule.pricing().is_none());
    Ok(())
}
