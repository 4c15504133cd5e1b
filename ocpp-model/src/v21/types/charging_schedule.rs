use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use super::{
    AbsolutePriceSchedule, ChargingRateUnit, ChargingSchedulePeriod, CustomData, LimitAtSoc,
    PriceLevelSchedule, SalesTariff, SchedulePricing, SchedulePricingRef,
};
use crate::validate::exclusive;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "single_pricing"))]
pub struct ChargingSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub id: i32,
    #[serde(rename = "limitAtSoC", skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub limit_at_soc: Option<LimitAtSoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_schedule: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    pub charging_rate_unit: ChargingRateUnit,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_charging_rate: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub power_tolerance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub signature_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 88))]
    pub digest_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_local_time: Option<bool>,
    #[validate(length(min = 1, max = 1024), nested)]
    pub charging_schedule_period: Vec<ChargingSchedulePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub randomized_delay: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub sales_tariff: Option<SalesTariff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub absolute_price_schedule: Option<AbsolutePriceSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub price_level_schedule: Option<PriceLevelSchedule>,
}

fn single_pricing(schedule: &ChargingSchedule) -> Result<(), ValidationError> {
    exclusive(&[
        ("salesTariff", schedule.sales_tariff.is_some()),
        ("absolutePriceSchedule", schedule.absolute_price_schedule.is_some()),
        ("priceLevelSchedule", schedule.price_level_schedule.is_some()),
    ])
}

impl ChargingSchedule {
    pub fn new(
        id: i32,
        charging_rate_unit: ChargingRateUnit,
        charging_schedule_period: Vec<ChargingSchedulePeriod>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            id,
            limit_at_soc: None,
            start_schedule: None,
            duration: None,
            charging_rate_unit,
            min_charging_rate: None,
            power_tolerance: None,
            signature_id: None,
            digest_value: None,
            use_local_time: None,
            charging_schedule_period,
            randomized_delay: None,
            sales_tariff: None,
            absolute_price_schedule: None,
            price_level_schedule: None,
        }
        .validated()
    }

    /// The attached price information. If several wire fields are set the schedule is invalid
    /// and the first one in declaration order is returned.
    pub fn pricing(&self) -> Option<SchedulePricingRef<'_>> {
        if let Some(tariff) = &self.sales_tariff {
            return Some(SchedulePricingRef::SalesTariff(tariff));
        }
        if let Some(schedule) = &self.absolute_price_schedule {
            return Some(SchedulePricingRef::AbsolutePriceSchedule(schedule));
        }
        self.price_level_schedule
            .as_ref()
            .map(SchedulePricingRef::PriceLevelSchedule)
    }

    /// Attaches `pricing`, dropping whatever was attached before.
    pub fn set_pricing(&mut self, pricing: Option<SchedulePricing>) {
        self.sales_tariff = None;
        self.absolute_price_schedule = None;
        self.price_level_schedule = None;
        match pricing {
            Some(SchedulePricing::SalesTariff(t)) => self.sales_tariff = Some(t),
            Some(SchedulePricing::AbsolutePriceSchedule(s)) => {
                self.absolute_price_schedule = Some(s)
            }
            Some(SchedulePricing::PriceLevelSchedule(s)) => self.price_level_schedule = Some(s),
            None => {}
        }
    }

    pub fn with_pricing(mut self, pricing: impl Into<SchedulePricing>) -> Self {
        self.set_pricing(Some(pricing.into()));
        self
    }

    pub fn take_pricing(&mut self) -> Option<SchedulePricing> {
        let sales = self.sales_tariff.take().map(SchedulePricing::SalesTariff);
        let absolute = self
            .absolute_price_schedule
            .take()
            .map(SchedulePricing::AbsolutePriceSchedule);
        let level = self
            .price_level_schedule
            .take()
            .map(SchedulePricing::PriceLevelSchedule);
        sales.or(absolute).or(level)
    }

    pub fn set_charging_schedule_period(
        &mut self,
        periods: Vec<ChargingSchedulePeriod>,
    ) -> Result<(), ModelError> {
        self.try_update(|schedule| schedule.charging_schedule_period = periods)
    }
}
