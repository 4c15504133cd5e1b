use validator::Validate;

use super::{CustomData, EvPriceRule};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvAbsolutePriceScheduleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub duration: i32,
    #[validate(length(min = 1, max = 8), nested)]
    pub ev_price_rule: Vec<EvPriceRule>,
}

impl EvAbsolutePriceScheduleEntry {
    pub fn new(duration: i32, ev_price_rule: Vec<EvPriceRule>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            duration,
            ev_price_rule,
        }
        .validated()
    }
}
