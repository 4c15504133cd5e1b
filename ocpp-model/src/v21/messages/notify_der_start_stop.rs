use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use super::super::types::CustomData;
use crate::validate::each_max_chars;
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "superseded_id_lengths"))]
pub struct NotifyDerStartStopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 36))]
    pub control_id: String,
    pub started: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24))]
    pub superseded_ids: Option<Vec<String>>,
}

fn superseded_id_lengths(request: &NotifyDerStartStopRequest) -> Result<(), ValidationError> {
    each_max_chars("supersededIds", request.superseded_ids.as_ref(), 36)
}

impl NotifyDerStartStopRequest {
    pub fn new(
        control_id: impl Into<String>,
        started: bool,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            control_id: control_id.into(),
            started,
            timestamp,
            superseded_ids: None,
        }
        .validated()
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct NotifyDerStartStopResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
