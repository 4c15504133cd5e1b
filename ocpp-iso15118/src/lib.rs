//! ISO 15118-20 form of the OCPP 2.1 price schedules.
//!
//! A price schedule handed over by an EV may be covered by a signature computed over its EXI
//! encoding. This crate carries the ISO schema types, a canonical bit codec for them, and the
//! conversion to and from the [`rocpp_model`] JSON types, such that
//! `EXI -> OCPP -> JSON -> OCPP -> EXI` reproduces the original bytes.
//!
//! The bit grammar is this crate's own: a `0x80` header, a 2-bit root code, 1-bit presence
//! flags and array continuation bits. It is not the schema-informed EXI grammar of
//! ISO 15118-20, so it cannot read documents produced by a real EV, and a signature computed
//! by an EV over its own encoding will not verify against these bytes.

mod convert;
mod error;
pub mod exi;
pub mod schema;

pub use error::{ConversionError, ExiError};
pub use schema::PriceSchedule;

use rocpp_model::format::json;
use rocpp_model::{ModelError, SchemaViolationKind};
use serde_json::Value;
use rocpp_model::v21::types::{
    AbsolutePriceSchedule, PriceLevelSchedule, SchedulePricing, SchedulePricingRef,
};

/// Decodes an EXI document into the OCPP model.
pub fn exi_to_ocpp(bytes: &[u8]) -> Result<SchedulePricing, ConversionError> {
    let schedule = PriceSchedule::decode(bytes)?;
    SchedulePricing::try_from(&schedule)
}

/// Encodes an OCPP price schedule as an EXI document. Sales tariffs have no ISO 15118-20 form.
pub fn ocpp_to_exi(pricing: SchedulePricingRef<'_>) -> Result<Vec<u8>, ConversionError> {
    let schedule = PriceSchedule::try_from(pricing)?;
    Ok(schedule.encode()?)
}

/// EXI document to the JSON object OCPP carries in `absolutePriceSchedule` or
/// `priceLevelSchedule`.
pub fn exi_to_json(bytes: &[u8]) -> Result<String, ConversionError> {
    let out = match exi_to_ocpp(bytes)? {
        SchedulePricing::AbsolutePriceSchedule(s) => json::encode(&s)?,
        SchedulePricing::PriceLevelSchedule(s) => json::encode(&s)?,
        SchedulePricing::SalesTariff(_) => return Err(ConversionError::UnknownSchedule),
    };
    log::trace!("converted {} EXI bytes to JSON", bytes.len());
    Ok(out)
}

/// Inverse of [`exi_to_json`]. The schedule kind is told apart by its mandatory list field.
pub fn json_to_exi(payload: &str) -> Result<Vec<u8>, ConversionError> {
    let tree: Value = serde_json::from_str(payload).map_err(|e| ModelError::SchemaViolation {
        field: String::new(),
        kind: SchemaViolationKind::Malformed {
            detail: e.to_string(),
        },
    })?;
    let pricing = match tree.as_object() {
        Some(fields) if fields.contains_key("priceRuleStacks") => {
            SchedulePricing::AbsolutePriceSchedule(json::decode::<AbsolutePriceSchedule>(payload)?)
        }
        Some(fields) if fields.contains_key("priceLevelScheduleEntries") => {
            SchedulePricing::PriceLevelSchedule(json::decode::<PriceLevelSchedule>(payload)?)
        }
        _ => {
            log::debug!("JSON payload is not a price schedule");
            return Err(ConversionError::UnknownSchedule);
        }
    };
    ocpp_to_exi(pricing.borrowed())
}
