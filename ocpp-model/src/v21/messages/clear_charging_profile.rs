use validator::Validate;

use super::super::types::{ClearChargingProfile, ClearChargingProfileStatus, CustomData, StatusInfo};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct ClearChargingProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_profile_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub charging_profile_criteria: Option<ClearChargingProfile>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearChargingProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: ClearChargingProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl ClearChargingProfileResponse {
    pub fn new(status: ClearChargingProfileStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
