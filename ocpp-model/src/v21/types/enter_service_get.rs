use validator::Validate;

use super::{CustomData, EnterService};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnterServiceGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub enter_service: EnterService,
    #[validate(length(max = 36))]
    pub id: String,
}

impl EnterServiceGet {
    pub fn new(enter_service: EnterService, id: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            enter_service,
            id: id.into(),
        }
        .validated()
    }
}
