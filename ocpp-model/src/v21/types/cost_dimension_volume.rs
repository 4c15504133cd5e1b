use rust_decimal::Decimal;
use validator::Validate;

use super::{CostDimension, CustomData};

/// Volume consumed in one cost dimension.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CostDimensionVolume {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(rename = "type")]
    pub dimension_type: CostDimension,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub volume: Decimal,
}

impl CostDimensionVolume {
    pub fn new(dimension_type: CostDimension, volume: Decimal) -> Self {
        Self {
            custom_data: None,
            dimension_type,
            volume,
        }
    }
}
