use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct AcChargingParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    /// Wh.
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub energy_amount: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub ev_min_current: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub ev_max_current: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub ev_max_voltage: Decimal,
}

impl AcChargingParameters {
    pub fn new(
        energy_amount: Decimal,
        ev_min_current: Decimal,
        ev_max_current: Decimal,
        ev_max_voltage: Decimal,
    ) -> Self {
        Self {
            energy_amount,
            ev_min_current,
            ev_max_current,
            ev_max_voltage,
            ..Default::default()
        }
    }
}
