use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::{join_path, ModelError, Rule};

/// Behaviour shared by every payload type of the model.
///
/// Field bounds are declared on the types with `#[derive(Validate)]`; this trait turns the
/// outcome into path-qualified [`ModelError`]s and adds the construction helpers.
pub trait Model: Validate + Clone {
    /// First violated constraint, in path order.
    fn check(&self) -> Result<(), ModelError> {
        match Validate::validate(self) {
            Ok(()) => Ok(()),
            Err(errors) => Err(first_violation(&errors)),
        }
    }

    fn is_valid(&self) -> bool {
        Validate::validate(self).is_ok()
    }

    /// Every violated constraint, sorted by path.
    fn violations(&self) -> Vec<ModelError> {
        match Validate::validate(self) {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut out = Vec::new();
                collect(&errors, "", &mut out);
                out
            }
        }
    }

    /// Passes the value through if it satisfies all its constraints.
    fn validated(self) -> Result<Self, ModelError> {
        self.check()?;
        Ok(self)
    }

    /// Applies `update` only if the result is still valid; otherwise `self` is left untouched.
    fn try_update<F>(&mut self, update: F) -> Result<(), ModelError>
    where
        F: FnOnce(&mut Self),
    {
        let mut next = self.clone();
        update(&mut next);
        next.check()?;
        *self = next;
        Ok(())
    }

    /// Debug view that also reports the validation outcome. Not a wire format.
    fn diagnostic(&self) -> Diagnostic<'_, Self> {
        Diagnostic(self)
    }
}

impl<T: Validate + Clone> Model for T {}

pub struct Diagnostic<'a, T>(&'a T);

impl<T: Model + fmt::Debug> fmt::Debug for Diagnostic<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)?;
        match self.0.check() {
            Ok(()) => f.write_str(" => valid"),
            Err(error) => write!(f, " => invalid ({error})"),
        }
    }
}

impl<T: Model + fmt::Debug> fmt::Display for Diagnostic<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

fn first_violation(errors: &ValidationErrors) -> ModelError {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.into_iter()
        .next()
        .unwrap_or_else(|| ModelError::constraint("", "", Rule::Other("invalid".to_owned())))
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ModelError>) {
    let mut entries: Vec<(String, &ValidationErrorsKind)> = errors
        .errors()
        .iter()
        .map(|(key, kind)| (key.to_string(), kind))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (key, kind) in entries {
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|error| field_violation(prefix, &key, error)))
            }
            ValidationErrorsKind::Struct(inner) => {
                collect(inner, &join_path(prefix, &wire_name(&key)), out)
            }
            ValidationErrorsKind::List(items) => {
                let base = join_path(prefix, &wire_name(&key));
                for (index, inner) in items {
                    collect(inner, &format!("{base}[{index}]"), out);
                }
            }
        }
    }
}

fn field_violation(prefix: &str, key: &str, error: &ValidationError) -> ModelError {
    let name = match error.params.get("field").and_then(Value::as_str) {
        Some(field) => field.to_owned(),
        None if key == "__all__" => String::new(),
        None => wire_name(key),
    };
    let value = error.params.get("value").map(render).unwrap_or_default();
    ModelError::ConstraintViolation {
        field: join_path(prefix, &name),
        value,
        rule: rule_of(error),
    }
}

fn rule_of(error: &ValidationError) -> Rule {
    let param = |name: &str| error.params.get(name);
    match error.code.as_ref() {
        "length" => {
            let min = param("min").and_then(Value::as_u64);
            let max = param("max").and_then(Value::as_u64);
            if matches!(param("value"), Some(Value::Array(_))) {
                Rule::Cardinality { min, max }
            } else {
                Rule::Length { min, max }
            }
        }
        "range" => Rule::Range {
            min: param("min").map(render),
            max: param("max").map(render),
        },
        "depth" => Rule::Depth {
            max: param("max").and_then(Value::as_u64).unwrap_or_default(),
        },
        "exclusive" => Rule::Exclusive {
            fields: param("fields").map(render).unwrap_or_default(),
        },
        code => Rule::Other(error.message.as_deref().unwrap_or(code).to_owned()),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Null => "null".to_owned(),
        other => other.to_string(),
    }
}

/// Wire names that do not follow plain camel case.
const IRREGULAR_WIRE_NAMES: &[(&str, &str)] = &[
    ("limit_at_soc", "limitAtSoC"),
    ("tax_rule_id", "taxRuleID"),
    ("target_soc", "targetSoC"),
    ("full_soc", "fullSoC"),
    ("bulk_soc", "bulkSoC"),
    ("ev_supported_der_control", "evSupportedDERControl"),
    ("fixed_pf", "fixedPF"),
    ("tax_type", "type"),
    ("fixed_pf_absorb", "fixedPFAbsorb"),
    ("fixed_pf_inject", "fixedPFInject"),
];

/// Maps a Rust field name reported by `validator` onto its wire name.
fn wire_name(key: &str) -> String {
    if let Some((_, wire)) = IRREGULAR_WIRE_NAMES.iter().find(|(rust, _)| *rust == key) {
        return (*wire).to_owned();
    }
    if !key.contains('_') || key.chars().any(|c| c.is_ascii_uppercase()) {
        return key.to_owned();
    }
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('_').enumerate() {
        match part {
            "" => {}
            "l2" | "l3" if i > 0 => {
                out.push('_');
                out.push_str(&part.to_ascii_uppercase());
            }
            _ if i == 0 => out.push_str(part),
            _ => {
                let mut chars = part.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                }
            }
        }
    }
    out
}

// Struct-level checks used by `#[validate(schema(function = ...))]`.

fn violation<T: Serialize + ?Sized>(code: &'static str, field: &str, value: &T) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.add_param(Cow::Borrowed("field"), &field);
    error.add_param(Cow::Borrowed("value"), &value);
    error
}

/// Discharge quantities are encoded as non-positive magnitudes.
pub(crate) fn non_positive(field: &str, value: Option<&Decimal>) -> Result<(), ValidationError> {
    match value {
        Some(v) if *v > Decimal::ZERO => {
            let mut error = violation("range", field, v);
            error.add_param(Cow::Borrowed("max"), &0);
            Err(error)
        }
        _ => Ok(()),
    }
}

pub(crate) fn each_max_chars(
    field: &str,
    items: Option<&Vec<String>>,
    max: u64,
) -> Result<(), ValidationError> {
    for (index, item) in items.into_iter().flatten().enumerate() {
        if item.chars().count() as u64 > max {
            let mut error = violation("length", &format!("{field}[{index}]"), item.as_str());
            error.add_param(Cow::Borrowed("max"), &max);
            return Err(error);
        }
    }
    Ok(())
}

/// At most one of `fields` may be present; the second present one is reported.
pub(crate) fn exclusive(fields: &[(&'static str, bool)]) -> Result<(), ValidationError> {
    let mut present = fields.iter().filter(|(_, set)| *set).map(|(name, _)| *name);
    let first = present.next();
    match (first, present.next()) {
        (Some(_), Some(second)) => {
            let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
            let mut error = violation("exclusive", second, "present");
            error.add_param(Cow::Borrowed("fields"), &names.join(", "));
            Err(error)
        }
        _ => Ok(()),
    }
}

pub(crate) fn at_least(field: &str, value: i64, min: i64) -> Result<(), ValidationError> {
    if value < min {
        let mut error = violation("range", field, &value);
        error.add_param(Cow::Borrowed("min"), &min);
        return Err(error);
    }
    Ok(())
}

pub(crate) fn max_depth(field: &str, depth: usize, max: usize) -> Result<(), ValidationError> {
    if depth > max {
        let mut error = violation("depth", field, &depth);
        error.add_param(Cow::Borrowed("max"), &max);
        return Err(error);
    }
    Ok(())
}
