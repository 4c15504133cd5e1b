use chrono::{DateTime, Duration};
use rocpp_iso15118::schema::{self, PriceSchedule};
use rocpp_iso15118::{json_to_exi, ocpp_to_exi, ConversionError};
use rocpp_model::v21::types::{
    AbsolutePriceSchedule, CustomData, PriceRule, PriceRuleStack, RationalNumber, RelativeTimeInterval,
    SalesTariff, SalesTariffEntry, SchedulePricing,
};
use rocpp_model::ModelError;

use crate::harness::{fixtures, harness::init_logger};

fn schedule() -> anyhow::Result<AbsolutePriceSchedule> {
    let rule = PriceRule::new(RationalNumber::new(-2, 30), RationalNumber::new(0, 0));
    Ok(AbsolutePriceSchedule::new(
        DateTime::from_timestamp(fixtures::TIME_ANCHOR as i64, 0)
            .ok_or_else(|| anyhow::anyhow!("time anchor"))?,
        1,
        "EUR",
        "en",
        fixtures::PRICE_ALGORITHM,
        vec![PriceRuleStack::new(0, vec![rule])?],
    )?)
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let plain = schedule()?;
    let iso = schema::AbsolutePriceSchedule::try_from(&plain)?;
    assert_eq!(iso.time_anchor, fixtures::TIME_ANCHOR);
    assert_eq!(iso.price_rule_stacks[0].price_rules[0].energy_fee, fixtures::rational(-2, 30));

    let mut tagged = plain.clone();
    tagged.price_rule_stacks[0].price_rule[0].energy_fee.custom_data =
        Some(CustomData::new("com.example")?);
    assert_eq!(
        schema::AbsolutePriceSchedule::try_from(&tagged),
        Err(ConversionError::CustomData {
            field: "priceRuleStacks[0].priceRule[0].energyFee.customData".to_owned()
        })
    );

    let mut tagged = plain.clone();
    tagged.custom_data = Some(CustomData::new("com.example")?);
    assert_eq!(
        schema::AbsolutePriceSchedule::try_from(&tagged),
        Err(ConversionError::CustomData {
            field: "customData".to_owned()
        })
    );

    let mut fractional = plain.clone();
    fractional.time_anchor += Duration::milliseconds(250);
    assert!(matches!(
        schema::AbsolutePriceSchedule::try_from(&fractional),
        Err(ConversionError::SubSecond { .. })
    ));

    let mut wide = plain.clone();
    wide.price_rule_stacks[0].price_rule[0].energy_fee = RationalNumber::new(-2, 40_000);
    assert_eq!(
        schema::AbsolutePriceSchedule::try_from(&wide),
        Err(ConversionError::OutOfRange {
            field: "value",
            value: "40000".to_owned()
        })
    );

    let mut wide = plain.clone();
    wide.minimum_cost = Some(RationalNumber::new(200, 1));
    assert!(matches!(
        schema::AbsolutePriceSchedule::try_from(&wide),
        Err(ConversionError::OutOfRange { field: "exponent", .. })
    ));

    let mut negative = plain.clone();
    negative.price_rule_stacks[0].duration = -1;
    assert!(matches!(
        schema::AbsolutePriceSchedule::try_from(&negative),
        Err(ConversionError::OutOfRange { field: "duration", .. })
    ));

    // ISO values wider than the OCPP integers
    let mut huge = fixtures::absolute_schedule();
    huge.price_schedule_id = u32::MAX;
    assert!(matches!(
        AbsolutePriceSchedule::try_from(&huge),
        Err(ConversionError::OutOfRange { field: "PriceScheduleID", .. })
    ));
    let bytes = PriceSchedule::Absolute(huge).encode()?;
    assert!(matches!(
        rocpp_iso15118::exi_to_ocpp(&bytes),
        Err(ConversionError::OutOfRange { .. })
    ));

    let tariff = SalesTariff::new(
        1,
        vec![SalesTariffEntry::new(RelativeTimeInterval::new(0))],
    )?;
    assert_eq!(
        ocpp_to_exi(SchedulePricing::SalesTariff(tariff).borrowed()),
        Err(ConversionError::UnknownSchedule)
    );
    assert_eq!(json_to_exi("{}"), Err(ConversionError::UnknownSchedule));
    assert!(matches!(
        json_to_exi("{\"priceRuleStacks\""),
        Err(ConversionError::Model(ModelError::SchemaViolation { .. }))
    ));
    assert!(matches!(
        json_to_exi(r#"{"priceRuleStacks":[]}"#),
        Err(ConversionError::Model(ModelError::SchemaViolation { .. }))
    ));
    Ok(())
}
