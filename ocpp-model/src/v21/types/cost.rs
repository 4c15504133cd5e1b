use validator::Validate;

use super::{CostKind, CustomData};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub cost_kind: CostKind,
    pub amount: i32,
    /// Decimal exponent applied to `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -3, max = 3))]
    pub amount_multiplier: Option<i32>,
}

impl Cost {
    pub fn new(cost_kind: CostKind, amount: i32) -> Self {
        Self {
            custom_data: None,
            cost_kind,
            amount,
            amount_multiplier: None,
        }
    }
}
