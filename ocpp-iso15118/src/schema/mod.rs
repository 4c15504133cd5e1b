//! ISO 15118-20 price schedule elements with their ISO value widths.
//!
//! Fields are declared, encoded and decoded in schema order.

mod absolute_price_schedule;
mod additional_service;
mod overstay_rule;
mod overstay_rule_list;
mod price_level_schedule;
mod price_level_schedule_entry;
mod price_rule;
mod price_rule_stack;
mod price_schedule;
mod rational_number;
mod tax_rule;

pub use absolute_price_schedule::*;
pub use additional_service::*;
pub use overstay_rule::*;
pub use overstay_rule_list::*;
pub use price_level_schedule::*;
pub use price_level_schedule_entry::*;
pub use price_rule::*;
pub use price_rule_stack::*;
pub use price_schedule::*;
pub use rational_number::*;
pub use tax_rule::*;

use crate::error::ExiError;

pub(crate) fn narrow<T: TryFrom<u64>>(field: &'static str, value: u64) -> Result<T, ExiError> {
    T::try_from(value).map_err(|_| ExiError::OutOfRange {
        field,
        value: value.to_string(),
    })
}
