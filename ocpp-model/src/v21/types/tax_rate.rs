use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaxRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// E.g. `Federal` or `State`.
    #[serde(rename = "type")]
    #[validate(length(max = 20))]
    pub tax_type: String,
    /// Percentage.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub tax: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub stack: Option<i32>,
}

impl TaxRate {
    pub fn new(tax_type: impl Into<String>, tax: Decimal) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            tax_type: tax_type.into(),
            tax,
            stack: None,
        }
        .validated()
    }
}
