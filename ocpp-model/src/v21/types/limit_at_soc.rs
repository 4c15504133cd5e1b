use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LimitAtSoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0, max = 100))]
    pub soc: i32,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub limit: Decimal,
}

impl LimitAtSoc {
    pub fn new(soc: i32, limit: Decimal) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            soc,
            limit,
        }
        .validated()
    }
}
