use validator::Validate;

use super::{CustomData, TariffFixedPrice, TaxRate};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TariffFixed {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(min = 1), nested)]
    pub prices: Vec<TariffFixedPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5), nested)]
    pub tax_rates: Option<Vec<TaxRate>>,
}

impl TariffFixed {
    pub fn new(prices: Vec<TariffFixedPrice>) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            prices,
            tax_rates: None,
        }
        .validated()
    }
}
