use validator::{Validate, ValidationError};

use super::{ChargingProfilePurpose, CustomData};
use crate::validate::each_max_chars;

/// Filter used by `GetChargingProfiles`.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "limit_sources"))]
pub struct ChargingProfileCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_profile_purpose: Option<ChargingProfilePurpose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub stack_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub charging_profile_id: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 4))]
    pub charging_limit_source: Option<Vec<String>>,
}

fn limit_sources(criterion: &ChargingProfileCriterion) -> Result<(), ValidationError> {
    each_max_chars(
        "chargingLimitSource",
        criterion.charging_limit_source.as_ref(),
        20,
    )
}
