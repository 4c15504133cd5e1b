use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use super::CustomData;
use crate::validate::non_positive;

/// New values for a `Dynamic` charging profile.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, Validate,
)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "discharge_limits"))]
pub struct ChargingScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
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
}

fn discharge_limits(update: &ChargingScheduleUpdate) -> Result<(), ValidationError> {
    non_positive("dischargeLimit", update.discharge_limit.as_ref())?;
    non_positive("dischargeLimit_L2", update.discharge_limit_l2.as_ref())?;
    non_positive("dischargeLimit_L3", update.discharge_limit_l3.as_ref())
}
