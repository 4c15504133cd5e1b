use chrono::{DateTime, Utc};
use validator::Validate;

use super::{CustomData, MessageContent, Price, TariffEnergy, TariffFixed, TariffTime};
use crate::{Model, ModelError};

/// Tariff a charging station applies to a session, with the price blocks per cost dimension.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(max = 60))]
    pub tariff_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 10), nested)]
    pub description: Option<Vec<MessageContent>>,
    #[validate(length(max = 3))]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub energy: Option<TariffEnergy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub charging_time: Option<TariffTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub idle_time: Option<TariffTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub fixed_fee: Option<TariffFixed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub reservation_time: Option<TariffTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub reservation_fixed: Option<TariffFixed>,
    /// Lower bound of the session cost. Whether it includes tax is up to the CSMS.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub min_cost: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub max_cost: Option<Price>,
}

impl Tariff {
    pub fn new(
        tariff_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            tariff_id: tariff_id.into(),
            description: None,
            currency: currency.into(),
            energy: None,
            valid_from: None,
            charging_time: None,
            idle_time: None,
            fixed_fee: None,
            reservation_time: None,
            reservation_fixed: None,
            min_cost: None,
            max_cost: None,
        }
        .validated()
    }
}
