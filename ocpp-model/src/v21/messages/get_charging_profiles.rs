use validator::Validate;

use super::super::types::{
    ChargingProfileCriterion, CustomData, GetChargingProfileStatus, StatusInfo,
};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetChargingProfilesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub request_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub evse_id: Option<i32>,
    #[validate(nested)]
    pub charging_profile: ChargingProfileCriterion,
}

impl GetChargingProfilesRequest {
    pub fn new(
        request_id: i32,
        charging_profile: ChargingProfileCriterion,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            request_id,
            evse_id: None,
            charging_profile,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetChargingProfilesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: GetChargingProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl GetChargingProfilesResponse {
    pub fn new(status: GetChargingProfileStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
