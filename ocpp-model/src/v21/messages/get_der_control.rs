use validator::Validate;

use super::super::types::{CustomData, DerControl, DerControlStatus, StatusInfo};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetDerControlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub request_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<DerControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 36))]
    pub control_id: Option<String>,
}

impl GetDerControlRequest {
    pub fn new(request_id: i32) -> Self {
        Self {
            custom_data: None,
            request_id,
            is_default: None,
            control_type: None,
            control_id: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetDerControlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: DerControlStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl GetDerControlResponse {
    pub fn new(status: DerControlStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
