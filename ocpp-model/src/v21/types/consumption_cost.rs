use rust_decimal::Decimal;
use validator::Validate;

use super::{Cost, CustomData};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub start_value: Decimal,
    #[validate(length(min = 1, max = 3), nested)]
    pub cost: Vec<Cost>,
}

impl ConsumptionCost {
    pub fn new(start_value: Decimal, cost: Vec<Cost>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            start_value,
            cost,
        }
        .validated()
    }
}
