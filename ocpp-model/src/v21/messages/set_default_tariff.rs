use validator::Validate;

use super::super::types::{CustomData, StatusInfo, Tariff, TariffSetStatus};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultTariffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub evse_id: i32,
    #[validate(nested)]
    pub tariff: Tariff,
}

impl SetDefaultTariffRequest {
    pub fn new(evse_id: i32, tariff: Tariff) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            evse_id,
            tariff,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultTariffResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: TariffSetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl SetDefaultTariffResponse {
    pub fn new(status: TariffSetStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
