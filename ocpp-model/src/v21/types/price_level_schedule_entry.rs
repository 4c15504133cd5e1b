use validator::Validate;

use super::CustomData;
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct PriceLevelScheduleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub duration: i32,
    #[validate(range(min = 0))]
    pub price_level: i32,
}

impl PriceLevelScheduleEntry {
    pub fn new(duration: i32, price_level: i32) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            duration,
            price_level,
        }
        .validated()
    }
}
