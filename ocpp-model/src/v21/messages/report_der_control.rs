use validator::Validate;

use super::super::types::{
    CustomData, DerCurveGet, EnterServiceGet, FixedPfGet, FixedVarGet, FreqDroopGet, GradientGet,
    LimitMaxDischargeGet,
};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportDerControlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub curve: Option<Vec<DerCurveGet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub enter_service: Option<Vec<EnterServiceGet>>,
    #[serde(rename = "fixedPFAbsorb", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub fixed_pf_absorb: Option<Vec<FixedPfGet>>,
    #[serde(rename = "fixedPFInject", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub fixed_pf_inject: Option<Vec<FixedPfGet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub fixed_var: Option<Vec<FixedVarGet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub freq_droop: Option<Vec<FreqDroopGet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub gradient: Option<Vec<GradientGet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 24), nested)]
    pub limit_max_discharge: Option<Vec<LimitMaxDischargeGet>>,
    pub request_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbc: Option<bool>,
}

impl ReportDerControlRequest {
    pub fn new(request_id: i32) -> Self {
        Self {
            custom_data: None,
            curve: None,
            enter_service: None,
            fixed_pf_absorb: None,
            fixed_pf_inject: None,
            fixed_var: None,
            freq_droop: None,
            gradient: None,
            limit_max_discharge: None,
            request_id,
            tbc: None,
        }
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct ReportDerControlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
}
