use validator::Validate;

use super::{CustomData, MessageFormat};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub format: MessageFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 8))]
    pub language: Option<String>,
    #[validate(length(max = 1024))]
    pub content: String,
}

impl MessageContent {
    pub fn new(format: MessageFormat, content: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            format,
            language: None,
            content: content.into(),
        }
        .validated()
    }
}
