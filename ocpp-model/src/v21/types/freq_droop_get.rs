use validator::Validate;

use super::{CustomData, FreqDroop};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FreqDroopGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub freq_droop: FreqDroop,
    #[validate(length(max = 36))]
    pub id: String,
    pub is_default: bool,
    pub is_superseded: bool,
}

impl FreqDroopGet {
    pub fn new(
        freq_droop: FreqDroop,
        id: impl Into<String>,
        is_default: bool,
        is_superseded: bool,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            freq_droop,
            id: id.into(),
            is_default,
            is_superseded,
        }
        .validated()
    }
}
