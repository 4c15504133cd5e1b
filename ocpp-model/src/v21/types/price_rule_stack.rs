use validator::Validate;

use super::{CustomData, PriceRule};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceRuleStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Seconds this stack applies, counted from the end of the previous one.
    pub duration: i32,
    #[validate(length(min = 1, max = 8), nested)]
    pub price_rule: Vec<PriceRule>,
}

impl PriceRuleStack {
    pub fn new(duration: i32, price_rule: Vec<PriceRule>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            duration,
            price_rule,
        }
        .validated()
    }
}
