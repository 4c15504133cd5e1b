use validator::Validate;

use super::{CustomData, RationalNumber};
use crate::{Model, ModelError};

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct TaxRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(rename = "taxRuleID")]
    #[validate(range(min = 0))]
    pub tax_rule_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub tax_rule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included_in_price: Option<bool>,
    pub applies_to_energy_fee: bool,
    pub applies_to_parking_fee: bool,
    pub applies_to_overstay_fee: bool,
    pub applies_to_minimum_maximum_cost: bool,
    #[validate(nested)]
    pub tax_rate: RationalNumber,
}

impl TaxRule {
    pub fn new(tax_rule_id: i32, tax_rate: RationalNumber) -> Result<Self, ModelError> {
        Self {
            tax_rule_id,
            tax_rate,
            ..Default::default()
        }
        .validated()
    }
}
