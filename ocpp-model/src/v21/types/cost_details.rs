use validator::Validate;

use super::{ChargingPeriod, CustomData, TotalCost, TotalUsage};
use crate::{Model, ModelError};

/// Running or final cost of a transaction, broken down per charging period.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CostDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1), nested)]
    pub charging_periods: Option<Vec<ChargingPeriod>>,
    #[validate(nested)]
    pub total_cost: TotalCost,
    #[validate(nested)]
    pub total_usage: TotalUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_to_calculate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub failure_reason: Option<String>,
}

impl CostDetails {
    pub fn new(total_cost: TotalCost, total_usage: TotalUsage) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            charging_periods: None,
            total_cost,
            total_usage,
            failure_to_calculate: None,
            failure_reason: None,
        }
        .validated()
    }
}
