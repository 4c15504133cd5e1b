use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(range(min = 0))]
    pub priority: i32,
    /// Percentage of the rated power per second.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub gradient: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub soft_gradient: Decimal,
}

impl Gradient {
    pub fn new(
        priority: i32,
        gradient: Decimal,
        soft_gradient: Decimal,
    ) -> Result<Self, ModelError> {
        Self {
            priority,
            gradient,
            soft_gradient,
            ..Default::default()
        }
        .validated()
    }
}
