use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use super::{
    AdditionalSelectedServices, CustomData, OverstayRuleList, PriceRuleStack, RationalNumber,
    TaxRule,
};
use crate::validate::at_least;
use crate::{Model, ModelError};

/// ISO 15118-20 absolute price schedule.
///
/// The schedule may be covered by `priceScheduleSignature` of the enclosing profile, so it has to
/// survive conversion to and from its EXI form unchanged: numbers are kept as exact
/// [`RationalNumber`]s and absent fields stay absent.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "schedule_id"))]
pub struct AbsolutePriceSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub time_anchor: DateTime<Utc>,
    #[serde(rename = "priceScheduleID")]
    pub price_schedule_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 160))]
    pub price_schedule_description: Option<String>,
    #[validate(length(max = 3))]
    pub currency: String,
    #[validate(length(max = 8))]
    pub language: String,
    /// URN of the algorithm the station applies to the price rules.
    #[validate(length(max = 2000))]
    pub price_algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub minimum_cost: Option<RationalNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub maximum_cost: Option<RationalNumber>,
    #[validate(length(min = 1, max = 1024), nested)]
    pub price_rule_stacks: Vec<PriceRuleStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 10), nested)]
    pub tax_rules: Option<Vec<TaxRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub overstay_rule_list: Option<OverstayRuleList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5), nested)]
    pub additional_selected_services: Option<Vec<AdditionalSelectedServices>>,
}

fn schedule_id(schedule: &AbsolutePriceSchedule) -> Result<(), ValidationError> {
    at_least("priceScheduleID", i64::from(schedule.price_schedule_id), 0)
}

impl AbsolutePriceSchedule {
    pub fn new(
        time_anchor: DateTime<Utc>,
        price_schedule_id: i32,
        currency: impl Into<String>,
        language: impl Into<String>,
        price_algorithm: impl Into<String>,
        price_rule_stacks: Vec<PriceRuleStack>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            time_anchor,
            price_schedule_id,
            price_schedule_description: None,
            currency: currency.into(),
            language: language.into(),
            price_algorithm: price_algorithm.into(),
            minimum_cost: None,
            maximum_cost: None,
            price_rule_stacks,
            tax_rules: None,
            overstay_rule_list: None,
            additional_selected_services: None,
        }
        .validated()
    }
}
