use validator::Validate;

use super::{CustomData, RationalNumber};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct OverstayRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub overstay_fee: RationalNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub overstay_rule_description: Option<String>,
    pub start_time: i32,
    pub overstay_fee_period: i32,
}

impl OverstayRule {
    pub fn new(overstay_fee: RationalNumber, start_time: i32, overstay_fee_period: i32) -> Self {
        Self {
            overstay_fee,
            start_time,
            overstay_fee_period,
            ..Default::default()
        }
    }
}
