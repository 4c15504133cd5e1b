use rocpp_iso15118::exi::BitWriter;
use rocpp_iso15118::schema::{
    AbsolutePriceSchedule, AdditionalService, OverstayRule, OverstayRuleList, PriceRule,
    PriceRuleStack, RationalNumber, TaxRule,
};

/// 2024-01-01T00:00:00Z
pub const TIME_ANCHOR: u64 = 1_704_067_200;
pub const PRICE_ALGORITHM: &str = "urn:iso:std:iso:15118:-20:PriceAlgorithm:1-Power";

pub fn rational(exponent: i8, value: i16) -> RationalNumber {
    RationalNumber { exponent, value }
}

/// Absolute price schedule with two price rule stacks, two tax rules and every optional
/// block exercised at least once.
pub fn absolute_schedule() -> AbsolutePriceSchedule {
    AbsolutePriceSchedule {
        time_anchor: TIME_ANCHOR,
        price_schedule_id: 7,
        price_schedule_description: Some("Night tariff".to_owned()),
        currency: "EUR".to_owned(),
        language: "de-DE".to_owned(),
        price_algorithm: PRICE_ALGORITHM.to_owned(),
        minimum_cost: Some(rational(-2, 150)),
        maximum_cost: None,
        tax_rules: Some(vec![
            TaxRule {
                tax_rule_id: 1,
                tax_rule_name: Some("VAT".to_owned()),
                tax_rate: rational(-2, 19),
                tax_included_in_price: Some(true),
                applies_to_energy_fee: true,
                applies_to_parking_fee: true,
                applies_to_overstay_fee: false,
                applies_minimum_maximum_cost: false,
            },
            TaxRule {
                tax_rule_id: 2,
                tax_rule_name: None,
                tax_rate: rational(-3, 5),
                tax_included_in_price: None,
                applies_to_energy_fee: false,
                applies_to_parking_fee: true,
                applies_to_overstay_fee: true,
                applies_minimum_maximum_cost: true,
            },
        ]),
        price_rule_stacks: vec![
            PriceRuleStack {
                duration: 0,
                price_rules: vec![
                    PriceRule {
                        energy_fee: rational(-2, 25),
                        parking_fee: None,
                        parking_fee_period: None,
                        carbon_dioxide_emission: None,
                        renewable_generation_percentage: Some(40),
                        power_range_start: rational(0, 0),
                    },
                    PriceRule {
                        energy_fee: rational(-2, 32),
                        parking_fee: Some(rational(-2, 5)),
                        parking_fee_period: Some(900),
                        carbon_dioxide_emission: Some(120),
                        renewable_generation_percentage: None,
                        power_range_start: rational(3, 11),
                    },
                ],
            },
            PriceRuleStack {
                duration: 3600,
                price_rules: vec![PriceRule {
                    energy_fee: rational(-3, -1),
                    parking_fee: None,
                    parking_fee_period: None,
                    carbon_dioxide_emission: None,
                    renewable_generation_percentage: None,
                    power_range_start: rational(0, 0),
                }],
            },
        ],
        overstay_rules: Some(OverstayRuleList {
            overstay_time_threshold: Some(1800),
            overstay_power_threshold: None,
            overstay_rules: vec![OverstayRule {
                overstay_rule_description: Some("after 30 min".to_owned()),
                start_time: 0,
                overstay_fee: rational(-2, 10),
                overstay_fee_period: 60,
            }],
        }),
        additional_selected_services: Some(vec![AdditionalService {
            service_name: "Parking".to_owned(),
            service_fee: rational(-1, 20),
        }]),
    }
}

fn put_rational(w: &mut BitWriter, exponent: i8, value: i16) {
    w.write_bits((i64::from(exponent) + 128) as u64, 8);
    w.write_signed(i64::from(value));
}

fn put_string(w: &mut BitWriter, value: &str) {
    w.write_unsigned(value.chars().count() as u64 + 2);
    for c in value.chars() {
        w.write_unsigned(u64::from(c));
    }
}

/// [`absolute_schedule`] written out element by element, independent of the schema encoders.
pub fn absolute_schedule_exi() -> Vec<u8> {
    let mut w = BitWriter::document();
    // root: AbsolutePriceSchedule
    w.write_bits(0, 2);
    w.write_unsigned(TIME_ANCHOR);
    w.write_unsigned(7);
    w.write_bit(true);
    put_string(&mut w, "Night tariff");
    put_string(&mut w, "EUR");
    put_string(&mut w, "de-DE");
    put_string(&mut w, PRICE_ALGORITHM);
    // MinimumCost
    w.write_bit(true);
    put_rational(&mut w, -2, 150);
    // MaximumCost
    w.write_bit(false);

    // TaxRules
    w.write_bit(true);
    w.write_unsigned(1);
    w.write_bit(true);
    put_string(&mut w, "VAT");
    put_rational(&mut w, -2, 19);
    w.write_bit(true);
    w.write_bool(true);
    for flag in [true, true, false, false] {
        w.write_bool(flag);
    }
    w.write_bit(true);
    w.write_unsigned(2);
    w.write_bit(false);
    put_rational(&mut w, -3, 5);
    w.write_bit(false);
    for flag in [false, true, true, true] {
        w.write_bool(flag);
    }
    w.write_bit(false);

    // PriceRuleStacks
    w.write_unsigned(0);
    put_rational(&mut w, -2, 25);
    w.write_bit(false);
    w.write_bit(false);
    w.write_bit(false);
    w.write_bit(true);
    w.write_bits(40, 7);
    put_rational(&mut w, 0, 0);
    w.write_bit(true);
    put_rational(&mut w, -2, 32);
    w.write_bit(true);
    put_rational(&mut w, -2, 5);
    w.write_bit(true);
    w.write_unsigned(900);
    w.write_bit(true);
    w.write_unsigned(120);
    w.write_bit(false);
    put_rational(&mut w, 3, 11);
    w.write_bit(false);

    w.write_bit(true);
    w.write_unsigned(3600);
    put_rational(&mut w, -3, -1);
    w.write_bit(false);
    w.write_bit(false);
    w.write_bit(false);
    w.write_bit(false);
    put_rational(&mut w, 0, 0);
    w.write_bit(false);
    w.write_bit(false);

    // OverstayRules
    w.write_bit(true);
    w.write_bit(true);
    w.write_unsigned(1800);
    w.write_bit(false);
    w.write_bit(true);
    put_string(&mut w, "after 30 min");
    w.write_unsigned(0);
    put_rational(&mut w, -2, 10);
    w.write_unsigned(60);
    w.write_bit(false);

    // AdditionalSelectedServices
    w.write_bit(true);
    put_string(&mut w, "Parking");
    put_rational(&mut w, -1, 20);
    w.write_bit(false);

    w.finish()
}

/// Price level schedule: id 5, three levels, two entries, time anchor at the epoch.
pub const PRICE_LEVEL_SCHEDULE_HEX: &str = "804001406780300020";
