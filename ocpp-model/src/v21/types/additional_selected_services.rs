use validator::Validate;

use super::{CustomData, RationalNumber};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalSelectedServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(nested)]
    pub service_fee: RationalNumber,
    #[validate(length(max = 80))]
    pub service_name: String,
}

impl AdditionalSelectedServices {
    pub fn new(
        service_name: impl Into<String>,
        service_fee: RationalNumber,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            service_fee,
            service_name: service_name.into(),
        }
        .validated()
    }
}
