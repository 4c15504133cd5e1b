//! JSON payload codec.
//!
//! Decoding reports the JSON path of the first offending field; both directions run the model
//! checks unless disabled through [`CodecConfig`].

use core::any::type_name;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{error::Category, Value};
use serde_path_to_error::{Path, Segment};

use super::CodecConfig;
use crate::decimal;
use crate::error::{join_path, ModelError, Rule, SchemaViolationKind};
use crate::validate::Model;

pub fn decode<T>(payload: &str) -> Result<T, ModelError>
where
    T: DeserializeOwned + Model,
{
    decode_with(payload, &CodecConfig::default())
}

pub fn decode_with<T>(payload: &str, config: &CodecConfig) -> Result<T, ModelError>
where
    T: DeserializeOwned + Model,
{
    if payload.len() > config.max_payload_len {
        let err = ModelError::PayloadTooLarge {
            len: payload.len(),
            max: config.max_payload_len,
        };
        log::debug!("rejected {}: {}", type_name::<T>(), err);
        return Err(err);
    }
    let mut de = serde_json::Deserializer::from_str(payload);
    let value: T = serde_path_to_error::deserialize(&mut de)
        .map_err(path_error)
        .and_then(|value| {
            de.end().map_err(|e| classify(String::new(), e))?;
            Ok(value)
        })
        .inspect_err(|err| log::debug!("rejected {}: {}", type_name::<T>(), err))?;
    finish(value, config)
}

/// Decodes from an already parsed JSON tree, e.g. the payload slot of a transport frame.
pub fn decode_value<T>(value: Value) -> Result<T, ModelError>
where
    T: DeserializeOwned + Model,
{
    decode_value_with(value, &CodecConfig::default())
}

/// Like [`decode_value`]; `max_payload_len` does not apply to a parsed tree.
pub fn decode_value_with<T>(value: Value, config: &CodecConfig) -> Result<T, ModelError>
where
    T: DeserializeOwned + Model,
{
    let decoded: T = serde_path_to_error::deserialize(value)
        .map_err(path_error)
        .inspect_err(|err| log::debug!("rejected {}: {}", type_name::<T>(), err))?;
    finish(decoded, config)
}

fn finish<T: Model>(value: T, config: &CodecConfig) -> Result<T, ModelError> {
    if config.validate_on_decode {
        value
            .check()
            .inspect_err(|err| log::debug!("rejected {}: {}", type_name::<T>(), err))?;
    }
    log::trace!("decoded {}", type_name::<T>());
    Ok(value)
}

pub fn encode<T>(value: &T) -> Result<String, ModelError>
where
    T: Serialize + Model,
{
    encode_with(value, &CodecConfig::default())
}

pub fn encode_with<T>(value: &T, config: &CodecConfig) -> Result<String, ModelError>
where
    T: Serialize + Model,
{
    if config.validate_on_encode {
        value
            .check()
            .inspect_err(|err| log::debug!("refused to encode {}: {}", type_name::<T>(), err))?;
    }
    let out = serde_json::to_string(value).map_err(|e| classify(String::new(), e))?;
    log::trace!("encoded {} ({} bytes)", type_name::<T>(), out.len());
    Ok(out)
}

/// JSON tree of `value`, without validation.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, ModelError> {
    serde_json::to_value(value).map_err(|e| classify(String::new(), e))
}

/// Key under which `serde_json` hands out the literal text of a number.
const ARBITRARY_PRECISION_KEY: &str = "$serde_json::private::Number";

fn path_error(error: serde_path_to_error::Error<serde_json::Error>) -> ModelError {
    let path = format_path(error.path());
    classify(path, error.into_inner())
}

fn format_path(path: &Path) -> String {
    let mut out = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } if key.as_str() == ARBITRARY_PRECISION_KEY => {}
            Segment::Map { key } => out = join_path(&out, key),
            Segment::Enum { variant } => out = join_path(&out, variant),
            _ => out = join_path(&out, "?"),
        }
    }
    out
}

fn classify(path: String, error: serde_json::Error) -> ModelError {
    let detail = error.to_string();
    let message = match detail.find(" at line ") {
        Some(cut) => &detail[..cut],
        None => detail.as_str(),
    };
    let kind = match error.classify() {
        Category::Syntax | Category::Eof | Category::Io => SchemaViolationKind::Malformed {
            detail: message.to_owned(),
        },
        Category::Data => {
            if let Some(field) = quoted(message, "missing field `") {
                return ModelError::missing_field(join_path(&path, field));
            }
            if let Some(text) = quoted(message, decimal::INEXACT) {
                return ModelError::constraint(path, text, Rule::Precision);
            }
            match quoted(message, "unknown variant `") {
                Some(token) => SchemaViolationKind::UnknownToken {
                    token: token.to_owned(),
                },
                None => SchemaViolationKind::InvalidType {
                    detail: message.to_owned(),
                },
            }
        }
    };
    ModelError::SchemaViolation { field: path, kind }
}

fn quoted<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(prefix)?;
    rest.find('`').map(|end| &rest[..end])
}
