use validator::Validate;

use super::{CustomData, StatusInfo, TariffClearStatus};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearTariffsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 60))]
    pub tariff_id: Option<String>,
    pub status: TariffClearStatus,
}

impl ClearTariffsResult {
    pub fn new(status: TariffClearStatus) -> Self {
        Self {
            custom_data: None,
            status_info: None,
            tariff_id: None,
            status,
        }
    }
}
