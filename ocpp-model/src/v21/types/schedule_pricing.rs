use super::{AbsolutePriceSchedule, PriceLevelSchedule, SalesTariff};

/// The price information a charging schedule may carry. On the wire each variant has its own
/// optional field on [`super::ChargingSchedule`]; at most one of them is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchedulePricing {
    SalesTariff(SalesTariff),
    AbsolutePriceSchedule(AbsolutePriceSchedule),
    PriceLevelSchedule(PriceLevelSchedule),
}

/// Borrowed view of [`SchedulePricing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulePricingRef<'a> {
    SalesTariff(&'a SalesTariff),
    AbsolutePriceSchedule(&'a AbsolutePriceSchedule),
    PriceLevelSchedule(&'a PriceLevelSchedule),
}

impl SchedulePricing {
    pub fn borrowed(&self) -> SchedulePricingRef<'_> {
        match self {
            SchedulePricing::SalesTariff(t) => SchedulePricingRef::SalesTariff(t),
            SchedulePricing::AbsolutePriceSchedule(s) => SchedulePricingRef::AbsolutePriceSchedule(s),
            SchedulePricing::PriceLevelSchedule(s) => SchedulePricingRef::PriceLevelSchedule(s),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        self.borrowed().wire_name()
    }
}

impl SchedulePricingRef<'_> {
    pub fn wire_name(&self) -> &'static str {
        match self {
            SchedulePricingRef::SalesTariff(_) => "salesTariff",
            SchedulePricingRef::AbsolutePriceSchedule(_) => "absolutePriceSchedule",
            SchedulePricingRef::PriceLevelSchedule(_) => "priceLevelSchedule",
        }
    }

    pub fn cloned(&self) -> SchedulePricing {
        match *self {
            SchedulePricingRef::SalesTariff(t) => SchedulePricing::SalesTariff(t.clone()),
            SchedulePricingRef::AbsolutePriceSchedule(s) => {
                SchedulePricing::AbsolutePriceSchedule(s.clone())
            }
            SchedulePricingRef::PriceLevelSchedule(s) => {
                SchedulePricing::PriceLevelSchedule(s.clone())
            }
        }
    }
}

impl From<SalesTariff> for SchedulePricing {
    fn from(value: SalesTariff) -> Self {
        SchedulePricing::SalesTariff(value)
    }
}

impl From<AbsolutePriceSchedule> for SchedulePricing {
    fn from(value: AbsolutePriceSchedule) -> Self {
        SchedulePricing::AbsolutePriceSchedule(value)
    }
}

impl From<PriceLevelSchedule> for SchedulePricing {
    fn from(value: PriceLevelSchedule) -> Self {
        SchedulePricing::PriceLevelSchedule(value)
    }
}
