use chrono::{DateTime, Utc};
use validator::Validate;

use super::{CostDimensionVolume, CustomData};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChargingPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub dimensions: Option<Vec<CostDimensionVolume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 60))]
    pub tariff_id: Option<String>,
    pub start_period: DateTime<Utc>,
}

impl ChargingPeriod {
    pub fn new(start_period: DateTime<Utc>) -> Self {
        Self {
            custom_data: None,
            dimensions: None,
            tariff_id: None,
            start_period,
        }
    }
}
