use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseError, TestRunner};
use rocpp_iso15118::schema::{
    AbsolutePriceSchedule, AdditionalService, OverstayRule, OverstayRuleList, PriceLevelSchedule,
    PriceLevelScheduleEntry, PriceRule, PriceRuleStack, PriceSchedule, RationalNumber, TaxRule,
};
use rocpp_iso15118::{exi_to_json, json_to_exi};

use crate::harness::harness::init_logger;

const OCPP_MAX: u32 = i32::MAX as u32;

fn rational() -> impl Strategy<Value = RationalNumber> {
    (any::<i8>(), any::<i16>()).prop_map(|(exponent, value)| RationalNumber { exponent, value })
}

fn text(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[a-zA-Z0-9 äß€-]{{0,{max}}}"))
        .expect("valid regex")
}

fn price_rule() -> impl Strategy<Value = PriceRule> {
    (
        rational(),
        option::of(rational()),
        option::of(0..=OCPP_MAX),
        option::of(any::<u16>()),
        option::of(0u8..=100),
        rational(),
    )
        .prop_map(
            |(energy_fee, parking_fee, period, co2, renewable, power_range_start)| PriceRule {
                energy_fee,
                parking_fee,
                parking_fee_period: period,
                carbon_dioxide_emission: co2,
                renewable_generation_percentage: renewable,
                power_range_start,
            },
        )
}

fn tax_rule() -> impl Strategy<Value = TaxRule> {
    (
        0..=OCPP_MAX,
        option::of(text(20)),
        rational(),
        option::of(any::<bool>()),
        any::<[bool; 4]>(),
    )
        .prop_map(|(id, name, rate, included, flags)| TaxRule {
            tax_rule_id: id,
            tax_rule_name: name,
            tax_rate: rate,
            tax_included_in_price: included,
            applies_to_energy_fee: flags[0],
            applies_to_parking_fee: flags[1],
            applies_to_overstay_fee: flags[2],
            applies_minimum_maximum_cost: flags[3],
        })
}

fn overstay_rules() -> impl Strategy<Value = OverstayRuleList> {
    let rule = (option::of(text(32)), 0..=OCPP_MAX, rational(), 0..=OCPP_MAX).prop_map(
        |(description, start_time, fee, period)| OverstayRule {
            overstay_rule_description: description,
            start_time,
            overstay_fee: fee,
            overstay_fee_period: period,
        },
    );
    (option::of(0..=OCPP_MAX), option::of(rational()), vec(rule, 1..=5)).prop_map(
        |(threshold, power, rules)| OverstayRuleList {
            overstay_time_threshold: threshold,
            overstay_power_threshold: power,
            overstay_rules: rules,
        },
    )
}

fn absolute_schedule() -> impl Strategy<Value = AbsolutePriceSchedule> {
    let stack = (0..=OCPP_MAX, vec(price_rule(), 1..=8)).prop_map(|(duration, price_rules)| {
        PriceRuleStack {
            duration,
            price_rules,
        }
    });
    let service = (text(80), rational()).prop_map(|(service_name, service_fee)| {
        AdditionalService {
            service_name,
            service_fee,
        }
    });
    let header = (
        0u64..4_000_000_000,
        0..=OCPP_MAX,
        option::of(text(160)),
        "[A-Z]{3}",
        "[a-z]{2}(-[A-Z]{2})?",
        text(40),
    );
    let body = (
        option::of(rational()),
        option::of(rational()),
        option::of(vec(tax_rule(), 1..=10)),
        vec(stack, 1..=4),
        option::of(overstay_rules()),
        option::of(vec(service, 1..=5)),
    );
    (header, body).prop_map(
        |(
            (time_anchor, id, description, currency, language, algorithm),
            (minimum_cost, maximum_cost, tax_rules, stacks, overstay, services),
        )| AbsolutePriceSchedule {
            time_anchor,
            price_schedule_id: id,
            price_schedule_description: description,
            currency,
            language,
            price_algorithm: algorithm,
            minimum_cost,
            maximum_cost,
            tax_rules,
            price_rule_stacks: stacks,
            overstay_rules: overstay,
            additional_selected_services: services,
        },
    )
}

fn price_level_schedule() -> impl Strategy<Value = PriceLevelSchedule> {
    let entry = (0..=OCPP_MAX, any::<u8>())
        .prop_map(|(duration, price_level)| PriceLevelScheduleEntry { duration, price_level });
    (
        0u64..4_000_000_000,
        0..=OCPP_MAX,
        option::of(text(32)),
        any::<u8>(),
        vec(entry, 1..=100),
    )
        .prop_map(|(time_anchor, id, description, levels, entries)| PriceLevelSchedule {
            time_anchor,
            price_schedule_id: id,
            price_schedule_description: description,
            number_of_price_levels: levels,
            entries,
        })
}

fn schedule() -> impl Strategy<Value = PriceSchedule> {
    prop_oneof![
        absolute_schedule().prop_map(PriceSchedule::Absolute),
        price_level_schedule().prop_map(PriceSchedule::PriceLevel),
    ]
}

fn fail(error: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(error.to_string())
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let mut runner = TestRunner::new(Config {
        cases: 128,
        ..Config::default()
    });
    runner
        .run(&schedule(), |schedule| {
            let bytes = schedule.encode().map_err(fail)?;
            prop_assert_eq!(&PriceSchedule::decode(&bytes).map_err(fail)?, &schedule);

            let text = exi_to_json(&bytes).map_err(fail)?;
            prop_assert_eq!(json_to_exi(&text).map_err(fail)?, bytes);
            Ok(())
        })
        .map_err(|e| anyhow::anyhow!("{e}"))
}
