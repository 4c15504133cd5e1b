use validator::Validate;

use super::super::types::{ChargingProfile, ChargingProfileStatus, CustomData, StatusInfo};
use crate::{Model, ModelError};

/// Installs a charging profile on an EVSE; `evseId` 0 targets the whole station.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetChargingProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
    #[validate(nested)]
    pub charging_profile: ChargingProfile,
}

impl SetChargingProfileRequest {
    pub fn new(evse_id: i32, charging_profile: ChargingProfile) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            evse_id,
            charging_profile,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetChargingProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: ChargingProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl SetChargingProfileResponse {
    pub fn new(status: ChargingProfileStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
