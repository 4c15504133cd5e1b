use validator::Validate;

use super::super::types::{CustomData, DerControl, DerControlStatus, StatusInfo};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearDerControlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<DerControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 36))]
    pub control_id: Option<String>,
}

impl ClearDerControlRequest {
    pub fn new(is_default: bool) -> Self {
        Self {
            custom_data: None,
            is_default,
            control_type: None,
            control_id: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearDerControlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: DerControlStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl ClearDerControlResponse {
    pub fn new(status: DerControlStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
