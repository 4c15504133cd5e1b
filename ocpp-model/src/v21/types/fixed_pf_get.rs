use validator::Validate;

use super::{CustomData, FixedPf};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FixedPfGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(rename = "fixedPF")]
    #[validate(nested)]
    pub fixed_pf: FixedPf,
    #[validate(length(max = 36))]
    pub id: String,
    pub is_default: bool,
    pub is_superseded: bool,
}

impl FixedPfGet {
    pub fn new(
        fixed_pf: FixedPf,
        id: impl Into<String>,
        is_default: bool,
        is_superseded: bool,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            fixed_pf,
            id: id.into(),
            is_default,
            is_superseded,
        }
        .validated()
    }
}
