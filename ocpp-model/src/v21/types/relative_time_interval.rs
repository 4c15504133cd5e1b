use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct RelativeTimeInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Seconds from the start of the schedule.
    pub start: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl RelativeTimeInterval {
    pub fn new(start: i32) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }
}
