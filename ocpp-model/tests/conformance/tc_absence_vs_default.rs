use rocpp_model::format::json;
use rocpp_model::v21::types::{ChargingSchedule, ChargingSchedulePeriod, RationalNumber, TaxRule};
use rocpp_model::Decimal;

use crate::harness::harness::init_logger;

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let absent = ChargingSchedulePeriod::new(0);
    let mut zero = ChargingSchedulePeriod::new(0);
    zero.limit = Some(Decimal::ZERO);
    zero.number_phases = Some(0);
    assert_ne!(absent, zero);

    let absent_text = json::encode(&absent)?;
    let zero_text = json::encode(&zero)?;
    assert_eq!(absent_text, r#"{"startPeriod":0}"#);
    assert_eq!(zero_text, r#"{"startPeriod":0,"limit":0,"numberPhases":0}"#);
    assert_eq!(json::decode::<ChargingSchedulePeriod>(&absent_text)?, absent);
    assert_eq!(json::decode::<ChargingSchedulePeriod>(&zero_text)?, zero);

    // explicit null reads as absent
    let nulled: ChargingSchedulePeriod = json::decode(r#"{"startPeriod":0,"limit":null}"#)?;
    assert_eq!(nulled, absent);

    // the written scale of a decimal survives
    let decoded: ChargingSchedulePeriod =
        json::decode(r#"{"startPeriod":60,"limit":16.50,"limit_L2":0.000001}"#)?;
    assert_eq!(decoded.limit, Some(Decimal::new(1650, 2)));
    assert_eq!(decoded.limit_l2, Some(Decimal::new(1, 6)));
    assert_eq!(
        json::encode(&decoded)?,
        r#"{"startPeriod":60,"limit":16.50,"limit_L2":0.000001}"#
    );

    // optional booleans: absent, false and true are three values
    let mut rule = TaxRule::new(1, RationalNumber::new(-2, 19))?;
    let absent_flag = json::encode(&rule)?;
    rule.tax_included_in_price = Some(false);
    let false_flag = json::encode(&rule)?;
    assert!(!absent_flag.contains("taxIncludedInPrice"));
    assert!(false_flag.contains(r#""taxIncludedInPrice":false"#));
    assert_eq!(json::decode::<TaxRule>(&false_flag)?, rule);

    let schedule: ChargingSchedule = json::decode(
        r#"{"id":1,"chargingRateUnit":"A","chargingSchedulePeriod":[{"startPeriod":0,"limit":32}]}"#,
    )?;
    assert!(schedule.start_schedule.is_none());
    assert!(schedule.pricing().is_none());
    assert_eq!(
        json::encode(&schedule)?,
        r#"{"id":1,"chargingRateUnit":"A","chargingSchedulePeriod":[{"startPeriod":0,"limit":32}]}"#
    );
    Ok(())
}
