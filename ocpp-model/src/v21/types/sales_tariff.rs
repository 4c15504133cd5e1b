use validator::Validate;

use super::{CustomData, SalesTariffEntry};
use crate::{Model, ModelError};

/// ISO 15118-2 sales tariff.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalesTariff {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub sales_tariff_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_e_price_levels: Option<i32>,
    #[validate(length(min = 1, max = 1024), nested)]
    pub sales_tariff_entry: Vec<SalesTariffEntry>,
}

impl SalesTariff {
    pub fn new(id: i32, sales_tariff_entry: Vec<SalesTariffEntry>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            id,
            sales_tariff_description: None,
            num_e_price_levels: None,
            sales_tariff_entry,
        }
        .validated()
    }
}
