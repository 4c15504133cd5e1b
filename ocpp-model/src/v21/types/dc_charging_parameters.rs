use rust_decimal::Decimal;
use validator::Validate;

use super::CustomData;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct DcChargingParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub ev_max_current: Decimal,
    #[serde(deserialize_with = "crate::decimal::exact")]
    pub ev_max_voltage: Decimal,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_max_power: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_energy_capacity: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub state_of_charge: Option<i32>,
    #[serde(rename = "fullSoC", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub full_soc: Option<i32>,
    #[serde(rename = "bulkSoC", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub bulk_soc: Option<i32>,
}

impl DcChargingParameters {
    pub fn new(ev_max_current: Decimal, ev_max_voltage: Decimal) -> Self {
        Self {
            ev_max_current,
            ev_max_voltage,
            ..Default::default()
        }
    }
}
