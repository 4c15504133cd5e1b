use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use super::{CustomData, OperationMode, V2xFreqWattPoint, V2xSignalWattPoint};
use crate::validate::non_positive;

#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "discharge_limits"))]
pub struct ChargingSchedulePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    pub start_period: i32,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<Decimal>,
    #[serde(
        rename = "limit_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_l2: Option<Decimal>,
    #[serde(
        rename = "limit_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_l3: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 3))]
    pub number_phases: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 3))]
    pub phase_to_use: Option<i32>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub discharge_limit: Option<Decimal>,
    #[serde(
        rename = "dischargeLimit_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub discharge_limit_l2: Option<Decimal>,
    #[serde(
        rename = "dischargeLimit_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub discharge_limit_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint: Option<Decimal>,
    #[serde(
        rename = "setpoint_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint_l2: Option<Decimal>,
    #[serde(
        rename = "setpoint_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint_l3: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint_reactive: Option<Decimal>,
    #[serde(
        rename = "setpointReactive_L2",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint_reactive_l2: Option<Decimal>,
    #[serde(
        rename = "setpointReactive_L3",
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub setpoint_reactive_l3: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preconditioning_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evse_sleep: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub v2x_baseline: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_mode: Option<OperationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 20), nested)]
    pub v2x_freq_watt_curve: Option<Vec<V2xFreqWattPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 20), nested)]
    pub v2x_signal_watt_curve: Option<Vec<V2xSignalWattPoint>>,
}

fn discharge_limits(period: &ChargingSchedulePeriod) -> Result<(), ValidationError> {
    non_positive("dischargeLimit", period.discharge_limit.as_ref())?;
    non_positive("dischargeLimit_L2", period.discharge_limit_l2.as_ref())?;
    non_positive("dischargeLimit_L3", period.discharge_limit_l3.as_ref())
}

impl ChargingSchedulePeriod {
    pub fn new(start_period: i32) -> Self {
        Self {
            start_period,
            ..Default::default()
        }
    }

    pub fn with_limit(start_period: i32, limit: Decimal) -> Self {
        Self {
            start_period,
            limit: Some(limit),
            ..Default::default()
        }
    }
}
