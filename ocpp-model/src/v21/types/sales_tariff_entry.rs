use validator::Validate;

use super::{ConsumptionCost, CustomData, RelativeTimeInterval};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct SalesTariffEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub relative_time_interval: RelativeTimeInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub e_price_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 3), nested)]
    pub consumption_cost: Option<Vec<ConsumptionCost>>,
}

impl SalesTariffEntry {
    pub fn new(relative_time_interval: RelativeTimeInterval) -> Self {
        Self {
            relative_time_interval,
            ..Default::default()
        }
    }
}
