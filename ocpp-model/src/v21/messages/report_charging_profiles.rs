use validator::Validate;

use super::super::types::{ChargingProfile, CustomData};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportChargingProfilesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub request_id: i32,
    #[validate(length(max = 20))]
    pub charging_limit_source: String,
    #[validate(length(min = 1), nested)]
    pub charging_profile: Vec<ChargingProfile>,
    /// More reports follow for the same request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbc: Option<bool>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
}

impl ReportChargingProfilesRequest {
    pub fn new(
        request_id: i32,
        charging_limit_source: impl Into<String>,
        charging_profile: Vec<ChargingProfile>,
        evse_id: i32,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            request_id,
            charging_limit_source: charging_limit_source.into(),
            charging_profile,
            tbc: None,
            evse_id,
        }
        .validated()
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct ReportChargingProfilesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
