use validator::Validate;

use super::super::types::{CustomData, StatusInfo, Tariff, TariffChangeStatus};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTransactionTariffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub tariff: Tariff,
    #[validate(length(max = 36))]
    pub transaction_id: String,
}

impl ChangeTransactionTariffRequest {
    pub fn new(tariff: Tariff, transaction_id: impl Into<String>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            tariff,
            transaction_id: transaction_id.into(),
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTransactionTariffResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: TariffChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

impl ChangeTransactionTariffResponse {
    pub fn new(status: TariffChangeStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
        }
    }
}
