use core::fmt;

/// Rejection raised while building, decoding or validating a model value.
///
/// `field` is a path in wire names, e.g. `chargingSchedule[0].chargingSchedulePeriod`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("constraint violation at `{field}`: {value} violates {rule}")]
    ConstraintViolation {
        field: String,
        value: String,
        rule: Rule,
    },

    #[error("schema violation at `{field}`: {kind}")]
    SchemaViolation {
        field: String,
        kind: SchemaViolationKind,
    },

    #[error("payload of {len} bytes exceeds the limit of {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },
}

/// The bound a [`ModelError::ConstraintViolation`] refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Character count of a text field.
    Length { min: Option<u64>, max: Option<u64> },
    /// Element count of an array field.
    Cardinality { min: Option<u64>, max: Option<u64> },
    /// Inclusive numeric bounds.
    Range {
        min: Option<String>,
        max: Option<String>,
    },
    /// Nesting depth of an open-ended extension block.
    Depth { max: u64 },
    /// At most one of the listed fields may be present.
    Exclusive { fields: String },
    /// The number has no exact `Decimal` form.
    Precision,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolationKind {
    /// A token outside the closed set of an enumeration.
    UnknownToken { token: String },
    /// A mandatory field is absent.
    MissingField,
    /// A value of the wrong JSON type.
    InvalidType { detail: String },
    /// The payload is not well-formed JSON.
    Malformed { detail: String },
}

impl ModelError {
    pub fn constraint(field: impl Into<String>, value: impl ToString, rule: Rule) -> Self {
        ModelError::ConstraintViolation {
            field: field.into(),
            value: value.to_string(),
            rule,
        }
    }

    pub fn unknown_token(field: impl Into<String>, token: impl Into<String>) -> Self {
        ModelError::SchemaViolation {
            field: field.into(),
            kind: SchemaViolationKind::UnknownToken {
                token: token.into(),
            },
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ModelError::SchemaViolation {
            field: field.into(),
            kind: SchemaViolationKind::MissingField,
        }
    }

    /// Path of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::ConstraintViolation { field, .. } => Some(field),
            ModelError::SchemaViolation { field, .. } => Some(field),
            ModelError::PayloadTooLarge { .. } => None,
        }
    }

    pub fn rule(&self) -> Option<&Rule> {
        match self {
            ModelError::ConstraintViolation { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// Re-roots the error path below `parent`.
    pub fn within(self, parent: &str) -> Self {
        self.map_field(|field| join_path(parent, &field))
    }

    /// Re-roots the error path below element `index` of an array.
    pub fn at_index(self, index: usize) -> Self {
        self.map_field(|field| join_path(&format!("[{index}]"), &field))
    }

    fn map_field(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            ModelError::ConstraintViolation { field, value, rule } => {
                ModelError::ConstraintViolation {
                    field: f(field),
                    value,
                    rule,
                }
            }
            ModelError::SchemaViolation { field, kind } => ModelError::SchemaViolation {
                field: f(field),
                kind,
            },
            other => other,
        }
    }
}

pub(crate) fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_owned()
    } else if child.is_empty() {
        parent.to_owned()
    } else if child.starts_with('[') {
        format!("{parent}{child}")
    } else {
        format!("{parent}.{child}")
    }
}

fn bound(value: &Option<impl fmt::Display>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "*".to_owned(),
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Length { min, max } => {
                write!(f, "length within [{}, {}] characters", bound(min), bound(max))
            }
            Rule::Cardinality { min, max } => {
                write!(f, "cardinality within [{}, {}] items", bound(min), bound(max))
            }
            Rule::Range { min, max } => write!(f, "range [{}, {}]", bound(min), bound(max)),
            Rule::Depth { max } => write!(f, "nesting depth of at most {max}"),
            Rule::Exclusive { fields } => write!(f, "at most one of {fields}"),
            Rule::Precision => f.write_str("an exact decimal of at most 28 fractional digits"),
            Rule::Other(rule) => f.write_str(rule),
        }
    }
}

impl fmt::Display for SchemaViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolationKind::UnknownToken { token } => write!(f, "unknown token `{token}`"),
            SchemaViolationKind::MissingField => f.write_str("mandatory field is absent"),
            SchemaViolationKind::InvalidType { detail } => write!(f, "invalid value: {detail}"),
            SchemaViolationKind::Malformed { detail } => write!(f, "malformed payload: {detail}"),
        }
    }
}
