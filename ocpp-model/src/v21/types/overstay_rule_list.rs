use validator::Validate;

use super::{CustomData, OverstayRule, RationalNumber};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverstayRuleList {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub overstay_power_threshold: Option<RationalNumber>,
    #[validate(length(min = 1, max = 5), nested)]
    pub overstay_rule: Vec<OverstayRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overstay_time_threshold: Option<i32>,
}

impl OverstayRuleList {
    pub fn new(overstay_rule: Vec<OverstayRule>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            overstay_power_threshold: None,
            overstay_rule,
            overstay_time_threshold: None,
        }
        .validated()
    }
}
