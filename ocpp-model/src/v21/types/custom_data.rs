use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::validate::max_depth;
use crate::{Model, ModelError};

/// Deepest nesting of objects and arrays accepted inside a vendor extension block.
pub const CUSTOM_DATA_MAX_DEPTH: usize = 16;

/// Vendor extension block carried by most payload types.
///
/// Apart from `vendorId` the content is open. It is kept as an owned JSON tree, so it cannot
/// contain cycles; its nesting depth is still bounded by [`CUSTOM_DATA_MAX_DEPTH`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "nesting_depth"))]
pub struct CustomData {
    #[validate(length(max = 255))]
    pub vendor_id: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl CustomData {
    pub fn new(vendor_id: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            vendor_id: vendor_id.into(),
            properties: Map::new(),
        }
        .validated()
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Nesting depth of the open properties; scalars directly under the block count as 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Value, usize)> = self.properties.values().map(|v| (v, 1)).collect();
        while let Some((value, level)) = stack.pop() {
            deepest = deepest.max(level);
            match value {
                Value::Array(items) => stack.extend(items.iter().map(|v| (v, level + 1))),
                Value::Object(fields) => stack.extend(fields.values().map(|v| (v, level + 1))),
                _ => {}
            }
        }
        deepest
    }
}

fn nesting_depth(data: &CustomData) -> Result<(), ValidationError> {
    max_depth("properties", data.depth(), CUSTOM_DATA_MAX_DEPTH)
}

impl Hash for CustomData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vendor_id.hash(state);
        for (key, value) in &self.properties {
            key.hash(state);
            value.to_string().hash(state);
        }
    }
}
