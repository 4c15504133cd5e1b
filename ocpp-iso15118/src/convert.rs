//! Lossless mapping between the OCPP JSON model and the ISO 15118-20 schema types.
//!
//! OCPP to ISO fails when a value does not fit the narrower ISO width, when a `customData`
//! block is present, or when the time anchor has sub-second precision. ISO to OCPP fails
//! only when a value does not fit the OCPP integer or the result breaks a model bound.

use chrono::{DateTime, Utc};
use rocpp_model::v21::types as ocpp;
use rocpp_model::Model;

use crate::error::ConversionError;
use crate::schema::{
    AbsolutePriceSchedule, AdditionalService, OverstayRule, OverstayRuleList, PriceLevelSchedule,
    PriceLevelScheduleEntry, PriceRule, PriceRuleStack, PriceSchedule, RationalNumber, TaxRule,
};

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_owned()
    } else {
        format!("{path}.{name}")
    }
}

fn no_custom_data(path: &str, data: &Option<ocpp::CustomData>) -> Result<(), ConversionError> {
    match data {
        Some(_) => Err(ConversionError::CustomData {
            field: join(path, "customData"),
        }),
        None => Ok(()),
    }
}

fn fit<S, T>(field: &'static str, value: S) -> Result<T, ConversionError>
where
    S: Copy + ToString,
    T: TryFrom<S>,
{
    T::try_from(value).map_err(|_| ConversionError::OutOfRange {
        field,
        value: value.to_string(),
    })
}

fn fit_opt<S, T>(field: &'static str, value: Option<S>) -> Result<Option<T>, ConversionError>
where
    S: Copy + ToString,
    T: TryFrom<S>,
{
    value.map(|v| fit(field, v)).transpose()
}

fn anchor_to_iso(time: &DateTime<Utc>) -> Result<u64, ConversionError> {
    if time.timestamp_subsec_nanos() != 0 {
        return Err(ConversionError::SubSecond {
            value: time.to_rfc3339(),
        });
    }
    fit("timeAnchor", time.timestamp())
}

fn anchor_from_iso(seconds: u64) -> Result<DateTime<Utc>, ConversionError> {
    let out_of_range = || ConversionError::OutOfRange {
        field: "timeAnchor",
        value: seconds.to_string(),
    };
    let seconds = i64::try_from(seconds).map_err(|_| out_of_range())?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(out_of_range)
}

fn map_vec<S, T>(
    path: &str,
    name: &str,
    items: &[S],
    map: impl Fn(&str, &S) -> Result<T, ConversionError>,
) -> Result<Vec<T>, ConversionError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| map(&format!("{}[{i}]", join(path, name)), item))
        .collect()
}

// OCPP -> ISO

fn rational_to_iso(path: &str, n: &ocpp::RationalNumber) -> Result<RationalNumber, ConversionError> {
    no_custom_data(path, &n.custom_data)?;
    Ok(RationalNumber {
        exponent: fit("exponent", n.exponent)?,
        value: fit("value", n.value)?,
    })
}

fn tax_rule_to_iso(path: &str, rule: &ocpp::TaxRule) -> Result<TaxRule, ConversionError> {
    no_custom_data(path, &rule.custom_data)?;
    Ok(TaxRule {
        tax_rule_id: fit("taxRuleID", rule.tax_rule_id)?,
        tax_rule_name: rule.tax_rule_name.clone(),
        tax_rate: rational_to_iso(&join(path, "taxRate"), &rule.tax_rate)?,
        tax_included_in_price: rule.tax_included_in_price,
        applies_to_energy_fee: rule.applies_to_energy_fee,
        applies_to_parking_fee: rule.applies_to_parking_fee,
        applies_to_overstay_fee: rule.applies_to_overstay_fee,
        applies_minimum_maximum_cost: rule.applies_to_minimum_maximum_cost,
    })
}

fn price_rule_to_iso(path: &str, rule: &ocpp::PriceRule) -> Result<PriceRule, ConversionError> {
    no_custom_data(path, &rule.custom_data)?;
    Ok(PriceRule {
        energy_fee: rational_to_iso(&join(path, "energyFee"), &rule.energy_fee)?,
        parking_fee: rule
            .parking_fee
            .as_ref()
            .map(|fee| rational_to_iso(&join(path, "parkingFee"), fee))
            .transpose()?,
        parking_fee_period: fit_opt("parkingFeePeriod", rule.parking_fee_period)?,
        carbon_dioxide_emission: fit_opt("carbonDioxideEmission", rule.carbon_dioxide_emission)?,
        renewable_generation_percentage: match rule.renewable_generation_percentage {
            Some(p) if !(0..=100).contains(&p) => {
                return Err(ConversionError::OutOfRange {
                    field: "renewableGenerationPercentage",
                    value: p.to_string(),
                })
            }
            other => fit_opt("renewableGenerationPercentage", other)?,
        },
        power_range_start: rational_to_iso(&join(path, "powerRangeStart"), &rule.power_range_start)?,
    })
}

fn stack_to_iso(path: &str, stack: &ocpp::PriceRuleStack) -> Result<PriceRuleStack, ConversionError> {
    no_custom_data(path, &stack.custom_data)?;
    Ok(PriceRuleStack {
        duration: fit("duration", stack.duration)?,
        price_rules: map_vec(path, "priceRule", &stack.price_rule, price_rule_to_iso)?,
    })
}

fn overstay_rule_to_iso(path: &str, rule: &ocpp::OverstayRule) -> Result<OverstayRule, ConversionError> {
    no_custom_data(path, &rule.custom_data)?;
    Ok(OverstayRule {
        overstay_rule_description: rule.overstay_rule_description.clone(),
        start_time: fit("startTime", rule.start_time)?,
        overstay_fee: rational_to_iso(&join(path, "overstayFee"), &rule.overstay_fee)?,
        overstay_fee_period: fit("overstayFeePeriod", rule.overstay_fee_period)?,
    })
}

fn overstay_list_to_iso(
    path: &str,
    list: &ocpp::OverstayRuleList,
) -> Result<OverstayRuleList, ConversionError> {
    no_custom_data(path, &list.custom_data)?;
    Ok(OverstayRuleList {
        overstay_time_threshold: fit_opt("overstayTimeThreshold", list.overstay_time_threshold)?,
        overstay_power_threshold: list
            .overstay_power_threshold
            .as_ref()
            .map(|p| rational_to_iso(&join(path, "overstayPowerThreshold"), p))
            .transpose()?,
        overstay_rules: map_vec(path, "overstayRule", &list.overstay_rule, overstay_rule_to_iso)?,
    })
}

fn service_to_iso(
    path: &str,
    service: &ocpp::AdditionalSelectedServices,
) -> Result<AdditionalService, ConversionError> {
    no_custom_data(path, &service.custom_data)?;
    Ok(AdditionalService {
        service_name: service.service_name.clone(),
        service_fee: rational_to_iso(&join(path, "serviceFee"), &service.service_fee)?,
    })
}

impl TryFrom<&ocpp::RationalNumber> for RationalNumber {
    type Error = ConversionError;

    fn try_from(value: &ocpp::RationalNumber) -> Result<Self, Self::Error> {
        rational_to_iso("", value)
    }
}

impl TryFrom<&ocpp::AbsolutePriceSchedule> for AbsolutePriceSchedule {
    type Error = ConversionError;

    fn try_from(s: &ocpp::AbsolutePriceSchedule) -> Result<Self, Self::Error> {
        no_custom_data("", &s.custom_data)?;
        let rational = |name: &str, n: &Option<ocpp::RationalNumber>| {
            n.as_ref().map(|n| rational_to_iso(name, n)).transpose()
        };
        Ok(Self {
            time_anchor: anchor_to_iso(&s.time_anchor)?,
            price_schedule_id: fit("priceScheduleID", s.price_schedule_id)?,
            price_schedule_description: s.price_schedule_description.clone(),
            currency: s.currency.clone(),
            language: s.language.clone(),
            price_algorithm: s.price_algorithm.clone(),
            minimum_cost: rational("minimumCost", &s.minimum_cost)?,
            maximum_cost: rational("maximumCost", &s.maximum_cost)?,
            tax_rules: s
                .tax_rules
                .as_ref()
                .map(|rules| map_vec("", "taxRules", rules, tax_rule_to_iso))
                .transpose()?,
            price_rule_stacks: map_vec("", "priceRuleStacks", &s.price_rule_stacks, stack_to_iso)?,
            overstay_rules: s
                .overstay_rule_list
                .as_ref()
                .map(|list| overstay_list_to_iso("overstayRuleList", list))
                .transpose()?,
            additional_selected_services: s
                .additional_selected_services
                .as_ref()
                .map(|services| {
                    map_vec("", "additionalSelectedServices", services, service_to_iso)
                })
                .transpose()?,
        })
    }
}

impl TryFrom<&ocpp::PriceLevelSchedule> for PriceLevelSchedule {
    type Error = ConversionError;

    fn try_from(s: &ocpp::PriceLevelSchedule) -> Result<Self, Self::Error> {
        no_custom_data("", &s.custom_data)?;
        Ok(Self {
            time_anchor: anchor_to_iso(&s.time_anchor)?,
            price_schedule_id: fit("priceScheduleId", s.price_schedule_id)?,
            price_schedule_description: s.price_schedule_description.clone(),
            number_of_price_levels: fit("numberOfPriceLevels", s.number_of_price_levels)?,
            entries: map_vec(
                "",
                "priceLevelScheduleEntries",
                &s.price_level_schedule_entries,
                |path, entry| {
                    no_custom_data(path, &entry.custom_data)?;
                    Ok(PriceLevelScheduleEntry {
                        duration: fit("duration", entry.duration)?,
                        price_level: fit("priceLevel", entry.price_level)?,
                    })
                },
            )?,
        })
    }
}

impl TryFrom<ocpp::SchedulePricingRef<'_>> for PriceSchedule {
    type Error = ConversionError;

    fn try_from(pricing: ocpp::SchedulePricingRef<'_>) -> Result<Self, Self::Error> {
        match pricing {
            ocpp::SchedulePricingRef::AbsolutePriceSchedule(s) => {
                Ok(PriceSchedule::Absolute(s.try_into()?))
            }
            ocpp::SchedulePricingRef::PriceLevelSchedule(s) => {
                Ok(PriceSchedule::PriceLevel(s.try_into()?))
            }
            ocpp::SchedulePricingRef::SalesTariff(_) => Err(ConversionError::UnknownSchedule),
        }
    }
}

// ISO -> OCPP

fn rational_from_iso(n: &RationalNumber) -> ocpp::RationalNumber {
    ocpp::RationalNumber::new(i32::from(n.exponent), i32::from(n.value))
}

fn price_rule_from_iso(rule: &PriceRule) -> Result<ocpp::PriceRule, ConversionError> {
    Ok(ocpp::PriceRule {
        custom_data: None,
        parking_fee_period: fit_opt("ParkingFeePeriod", rule.parking_fee_period)?,
        carbon_dioxide_emission: rule.carbon_dioxide_emission.map(i32::from),
        renewable_generation_percentage: rule.renewable_generation_percentage.map(i32::from),
        energy_fee: rational_from_iso(&rule.energy_fee),
        parking_fee: rule.parking_fee.as_ref().map(rational_from_iso),
        power_range_start: rational_from_iso(&rule.power_range_start),
    })
}

fn stack_from_iso(stack: &PriceRuleStack) -> Result<ocpp::PriceRuleStack, ConversionError> {
    Ok(ocpp::PriceRuleStack {
        custom_data: None,
        duration: fit("Duration", stack.duration)?,
        price_rule: stack
            .price_rules
            .iter()
            .map(price_rule_from_iso)
            .collect::<Result<_, _>>()?,
    })
}

fn tax_rule_from_iso(rule: &TaxRule) -> Result<ocpp::TaxRule, ConversionError> {
    Ok(ocpp::TaxRule {
        custom_data: None,
        tax_rule_id: fit("TaxRuleID", rule.tax_rule_id)?,
        tax_rule_name: rule.tax_rule_name.clone(),
        tax_included_in_price: rule.tax_included_in_price,
        applies_to_energy_fee: rule.applies_to_energy_fee,
        applies_to_parking_fee: rule.applies_to_parking_fee,
        applies_to_overstay_fee: rule.applies_to_overstay_fee,
        applies_to_minimum_maximum_cost: rule.applies_minimum_maximum_cost,
        tax_rate: rational_from_iso(&rule.tax_rate),
    })
}

fn overstay_rule_from_iso(rule: &OverstayRule) -> Result<ocpp::OverstayRule, ConversionError> {
    Ok(ocpp::OverstayRule {
        custom_data: None,
        overstay_fee: rational_from_iso(&rule.overstay_fee),
        overstay_rule_description: rule.overstay_rule_description.clone(),
        start_time: fit("StartTime", rule.start_time)?,
        overstay_fee_period: fit("OverstayFeePeriod", rule.overstay_fee_period)?,
    })
}

fn overstay_list_from_iso(list: &OverstayRuleList) -> Result<ocpp::OverstayRuleList, ConversionError> {
    Ok(ocpp::OverstayRuleList {
        custom_data: None,
        overstay_power_threshold: list.overstay_power_threshold.as_ref().map(rational_from_iso),
        overstay_rule: list
            .overstay_rules
            .iter()
            .map(overstay_rule_from_iso)
            .collect::<Result<_, _>>()?,
        overstay_time_threshold: fit_opt("OverstayTimeThreshold", list.overstay_time_threshold)?,
    })
}

impl From<&RationalNumber> for ocpp::RationalNumber {
    fn from(value: &RationalNumber) -> Self {
        rational_from_iso(value)
    }
}

impl TryFrom<&AbsolutePriceSchedule> for ocpp::AbsolutePriceSchedule {
    type Error = ConversionError;

    fn try_from(s: &AbsolutePriceSchedule) -> Result<Self, Self::Error> {
        let schedule = ocpp::AbsolutePriceSchedule {
            custom_data: None,
            time_anchor: anchor_from_iso(s.time_anchor)?,
            price_schedule_id: fit("PriceScheduleID", s.price_schedule_id)?,
            price_schedule_description: s.price_schedule_description.clone(),
            currency: s.currency.clone(),
            language: s.language.clone(),
            price_algorithm: s.price_algorithm.clone(),
            minimum_cost: s.minimum_cost.as_ref().map(rational_from_iso),
            maximum_cost: s.maximum_cost.as_ref().map(rational_from_iso),
            price_rule_stacks: s
                .price_rule_stacks
                .iter()
                .map(stack_from_iso)
                .collect::<Result<_, _>>()?,
            tax_rules: s
                .tax_rules
                .as_ref()
                .map(|rules| rules.iter().map(tax_rule_from_iso).collect::<Result<_, _>>())
                .transpose()?,
            overstay_rule_list: s
                .overstay_rules
                .as_ref()
                .map(overstay_list_from_iso)
                .transpose()?,
            additional_selected_services: s.additional_selected_services.as_ref().map(|services| {
                services
                    .iter()
                    .map(|service| ocpp::AdditionalSelectedServices {
                        custom_data: None,
                        service_fee: rational_from_iso(&service.service_fee),
                        service_name: service.service_name.clone(),
                    })
                    .collect()
            }),
        };
        Ok(schedule.validated()?)
    }
}

impl TryFrom<&PriceLevelSchedule> for ocpp::PriceLevelSchedule {
    type Error = ConversionError;

    fn try_from(s: &PriceLevelSchedule) -> Result<Self, Self::Error> {
        let schedule = ocpp::PriceLevelSchedule {
            custom_data: None,
            price_level_schedule_entries: s
                .entries
                .iter()
                .map(|entry| {
                    Ok(ocpp::PriceLevelScheduleEntry {
                        custom_data: None,
                        duration: fit("Duration", entry.duration)?,
                        price_level: i32::from(entry.price_level),
                    })
                })
                .collect::<Result<_, ConversionError>>()?,
            time_anchor: anchor_from_iso(s.time_anchor)?,
            price_schedule_id: fit("PriceScheduleID", s.price_schedule_id)?,
            price_schedule_description: s.price_schedule_description.clone(),
            number_of_price_levels: i32::from(s.number_of_price_levels),
        };
        Ok(schedule.validated()?)
    }
}

impl TryFrom<&PriceSchedule> for ocpp::SchedulePricing {
    type Error = ConversionError;

    fn try_from(schedule: &PriceSchedule) -> Result<Self, Self::Error> {
        Ok(match schedule {
            PriceSchedule::Absolute(s) => {
                ocpp::SchedulePricing::AbsolutePriceSchedule(s.try_into()?)
            }
            PriceSchedule::PriceLevel(s) => ocpp::SchedulePricing::PriceLevelSchedule(s.try_into()?),
        })
    }
}
