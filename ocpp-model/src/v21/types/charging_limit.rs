use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChargingLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// `EMS`, `Other`, `SO`, `CSO` or a vendor specific source.
    #[validate(length(max = 20))]
    pub charging_limit_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_local_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_grid_critical: Option<bool>,
}

impl ChargingLimit {
    pub fn new(charging_limit_source: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            charging_limit_source: charging_limit_source.into(),
            is_local_generation: None,
            is_grid_critical: None,
        }
        .validated()
    }
}
