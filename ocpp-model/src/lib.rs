//! OCPP 2.1 smart charging and tariff payload model.
//!
//! Payload types live under [`v21::types`] and [`v21::messages`]. Every type derives
//! [`Validate`]; the [`Model`] trait layered on top reports violations as [`ModelError`]s with
//! field paths in wire names. [`format::json`] decodes and encodes payloads with the same checks.

#[macro_use]
mod macros;

mod decimal;
mod error;
pub mod format;
pub mod v21;
mod validate;

pub use error::{ModelError, Rule, SchemaViolationKind};
pub use rust_decimal::Decimal;
pub use validate::{Diagnostic, Model};
pub use validator::Validate;
