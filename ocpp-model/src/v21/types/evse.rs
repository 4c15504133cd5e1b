use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct Evse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub connector_id: Option<i32>,
}

impl Evse {
    pub fn new(id: i32) -> Result<Self, ModelError> {
        Self {
            id,
            ..Default::default()
        }
        .validated()
    }
}
