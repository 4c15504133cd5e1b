use validator::Validate;

use super::{CustomData, RationalNumber};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_fee_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub carbon_dioxide_emission: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub renewable_generation_percentage: Option<i32>,
    #[validate(nested)]
    pub energy_fee: RationalNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub parking_fee: Option<RationalNumber>,
    #[validate(nested)]
    pub power_range_start: RationalNumber,
}

impl PriceRule {
    pub fn new(energy_fee: RationalNumber, power_range_start: RationalNumber) -> Self {
        Self {
            energy_fee,
            power_range_start,
            ..Default::default()
        }
    }
}
