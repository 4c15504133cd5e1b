use validator::Validate;

use super::{CustomData, LimitMaxDischarge};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LimitMaxDischargeGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub limit_max_discharge: LimitMaxDischarge,
    #[validate(length(max = 36))]
    pub id: String,
    pub is_default: bool,
    pub is_superseded: bool,
}

impl LimitMaxDischargeGet {
    pub fn new(
        limit_max_discharge: LimitMaxDischarge,
        id: impl Into<String>,
        is_default: bool,
        is_superseded: bool,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            limit_max_discharge,
            id: id.into(),
            is_default,
            is_superseded,
        }
        .validated()
    }
}
