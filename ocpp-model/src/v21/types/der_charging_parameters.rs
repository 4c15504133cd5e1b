use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, DerControl, IslandingDetection};

/// DER capabilities an EV reports in its charging needs. Every field is optional.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
pub struct DerChargingParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(rename = "evSupportedDERControl", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub ev_supported_der_control: Option<Vec<DerControl>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_over_excited_max_discharge_power: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_over_excited_power_factor: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_under_excited_max_discharge_power: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_under_excited_power_factor: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_apparent_power: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_apparent_power: Option<Decimal>,
    #[serde(
        rename = "maxChargeApparentPower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_apparent_power_l2: Option<Decimal>,
    #[serde(
        rename = "maxChargeApparentPower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_apparent_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_apparent_power: Option<Decimal>,
    #[serde(
        rename = "maxDischargeApparentPower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_apparent_power_l2: Option<Decimal>,
    #[serde(
        rename = "maxDischargeApparentPower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_apparent_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_reactive_power: Option<Decimal>,
    #[serde(
        rename = "maxChargeReactivePower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_reactive_power_l2: Option<Decimal>,
    #[serde(
        rename = "maxChargeReactivePower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charge_reactive_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_charge_reactive_power: Option<Decimal>,
    #[serde(
        rename = "minChargeReactivePower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_charge_reactive_power_l2: Option<Decimal>,
    #[serde(
        rename = "minChargeReactivePower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_charge_reactive_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_reactive_power: Option<Decimal>,
    #[serde(
        rename = "maxDischargeReactivePower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_reactive_power_l2: Option<Decimal>,
    #[serde(
        rename = "maxDischargeReactivePower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_discharge_reactive_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_discharge_reactive_power: Option<Decimal>,
    #[serde(
        rename = "minDischargeReactivePower_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_discharge_reactive_power_l2: Option<Decimal>,
    #[serde(
        rename = "minDischargeReactivePower_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_discharge_reactive_power_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub nominal_voltage: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub nominal_voltage_offset: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_nominal_voltage: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_nominal_voltage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub ev_inverter_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub ev_inverter_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub ev_inverter_serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub ev_inverter_sw_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub ev_inverter_hw_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub ev_islanding_detection_method: Option<Vec<IslandingDetection>>,
    /// Seconds.
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_islanding_trip_time: Option<Decimal>,
    #[serde(
        rename = "evMaximumLevel1DCInjection",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_maximum_level1_dc_injection: Option<Decimal>,
    #[serde(
        rename = "evDurationLevel1DCInjection",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_duration_level1_dc_injection: Option<Decimal>,
    #[serde(
        rename = "evMaximumLevel2DCInjection",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_maximum_level2_dc_injection: Option<Decimal>,
    #[serde(
        rename = "evDurationLevel2DCInjection",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_duration_level2_dc_injection: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_reactive_susceptance: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ev_session_total_discharge_energy_available: Option<Decimal>,
}
