use chrono::{TimeZone, Utc};
use rocpp_model::v21::messages::set_charging_profile::SetChargingProfileRequest;
use rocpp_model::v21::types::{AbsolutePriceSchedule, PriceRule, PriceRuleStack, RationalNumber};
use rocpp_model::{Model, ModelError, Rule, Validate};

use crate::harness::{
    fixtures,
    harness::{init_logger, violation},
};

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let request = SetChargingProfileRequest::new(0, fixtures::tx_default_profile()?)?;

    // request -> profile -> schedule -> period
    let mut broken = request.clone();
    broken.charging_profile.charging_schedule[0].charging_schedule_period[0].phase_to_use =
        Some(4);
    assert!(!broken.is_valid());
    assert!(broken.validate().is_err());
    let err = violation(broken.check());
    assert_eq!(
        err.field(),
        Some("chargingProfile.chargingSchedule[0].chargingSchedulePeriod[0].phaseToUse")
    );
    assert!(matches!(err, ModelError::ConstraintViolation { ref value, .. } if value == "4"));

    // request -> profile -> schedule -> absolute price schedule -> stack -> rule
    let anchor = Utc
        .with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("anchor"))?;
    let rule = PriceRule::new(RationalNumber::new(-2, 31), RationalNumber::new(0, 0));
    let prices = AbsolutePriceSchedule::new(
        anchor,
        1,
        "EUR",
        "en",
        "urn:example:power",
        vec![PriceRuleStack::new(0, vec![rule])?],
    )?;
    let mut priced = request.clone();
    priced.charging_profile.charging_schedule[0].set_pricing(Some(prices.into()));
    assert!(priced.is_valid());

    if let Some(schedule) = priced.charging_profile.charging_schedule[0]
        .absolute_price_schedule
        .as_mut()
    {
        schedule.price_rule_stacks[0].price_rule[0].renewable_generation_percentage = Some(101);
    }
    let err = violation(priced.check());
    assert_eq!(
        err.field(),
        Some(
            "chargingProfile.chargingSchedule[0].absolutePriceSchedule.priceRuleStacks[0].priceRule[0].renewableGenerationPercentage"
        )
    );

    // every violation is reported, ordered by path
    broken.charging_profile.stack_level = -1;
    broken.evse_id = -1;
    let fields: Vec<String> = broken
        .violations()
        .iter()
        .filter_map(|e| e.field().map(str::to_owned))
        .collect();
    assert_eq!(
        fields,
        [
            "chargingProfile.chargingSchedule[0].chargingSchedulePeriod[0].phaseToUse",
            "chargingProfile.stackLevel",
            "evseId",
        ]
    );
    assert!(broken
        .violations()
        .iter()
        .all(|e| matches!(e.rule(), Some(Rule::Range { .. }))));
    assert!(request.violations().is_empty());
    Ok(())
}
