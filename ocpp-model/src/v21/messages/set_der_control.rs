use validator::{Validate, ValidationError};

use super::super::types::{
    CustomData, DerControl, DerControlStatus, DerCurve, EnterService, FixedPf, FixedVar, FreqDroop,
    Gradient, LimitMaxDischarge, StatusInfo,
};
use crate::validate::each_max_chars;
use crate::{Model, ModelError};

/// Only the control matching `controlType` is expected to be set; that is left to the receiver.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetDerControlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub is_default: bool,
    #[validate(length(max = 36))]
    pub control_id: String,
    pub control_type: DerControl,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub curve: Option<DerCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub enter_service: Option<EnterService>,
    #[serde(rename = "fixedPFAbsorb", skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub fixed_pf_absorb: Option<FixedPf>,
    #[serde(rename = "fixedPFInject", skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub fixed_pf_inject: Option<FixedPf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub fixed_var: Option<FixedVar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub freq_droop: Option<FreqDroop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub gradient: Option<Gradient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub limit_max_discharge: Option<LimitMaxDischarge>,
}

impl SetDerControlRequest {
    pub fn new(
        is_default: bool,
        control_id: impl Into<String>,
        control_type: DerControl,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            is_default,
            control_id: control_id.into(),
            control_type,
            curve: None,
            enter_service: None,
            fixed_pf_absorb: None,
            fixed_pf_inject: None,
            fixed_var: None,
            freq_droop: None,
            gradient: None,
            limit_max_discharge: None,
        }
        .validated()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "superseded_id_lengths"))]
pub struct SetDerControlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub status: DerControlStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24))]
    pub superseded_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub status_info: Option<StatusInfo>,
}

fn superseded_id_lengths(response: &SetDerControlResponse) -> Result<(), ValidationError> {
    each_max_chars("supersededIds", response.superseded_ids.as_ref(), 36)
}

impl SetDerControlResponse {
    pub fn new(status: DerControlStatus) -> Self {
        Self {
            custom_data: None,
            status,
            superseded_ids: None,
            status_info: None,
        }
    }
}
