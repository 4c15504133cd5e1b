use validator::Validate;

use super::{CustomData, Price, TariffCost, TotalPrice};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TotalCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 3))]
    pub currency: String,
    pub type_of_cost: TariffCost,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub fixed: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub energy: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub charging_time: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub idle_time: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub reservation_time: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub reservation_fixed: Option<Price>,
    #[validate(nested)]
    pub total: TotalPrice,
}

impl TotalCost {
    pub fn new(
        currency: impl Into<String>,
        type_of_cost: TariffCost,
        total: TotalPrice,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            currency: currency.into(),
            type_of_cost,
            fixed: None,
            energy: None,
            charging_time: None,
            idle_time: None,
            reservation_time: None,
            reservation_fixed: None,
            total,
        }
        .validated()
    }
}
