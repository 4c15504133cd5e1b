use validator::Validate;

use super::{CustomData, DerControl, DerCurve};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DerCurveGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub curve: DerCurve,
    pub curve_type: DerControl,
    #[validate(length(max = 36))]
    pub id: String,
    pub is_default: bool,
    pub is_superseded: bool,
}

impl DerCurveGet {
    pub fn new(
        curve: DerCurve,
        curve_type: DerControl,
        id: impl Into<String>,
        is_default: bool,
        is_superseded: bool,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            curve,
            curve_type,
            id: id.into(),
            is_default,
            is_superseded,
        }
        .validated()
    }
}
