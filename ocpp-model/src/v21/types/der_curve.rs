use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use super::{CustomData, DerCurvePoints, DerUnit, Hysteresis, ReactivePowerParams, VoltageParams};
use crate::{Model, ModelError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DerCurve {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[validate(length(min = 1, max = 10), nested)]
    pub curve_data: Vec<DerCurvePoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub hysteresis: Option<Hysteresis>,
    #[validate(range(min = 0))]
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub reactive_power_params: Option<ReactivePowerParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub voltage_params: Option<VoltageParams>,
    pub y_unit: DerUnit,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_time: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::decimal::exact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Decimal>,
}

impl DerCurve {
    pub fn new(
        curve_data: Vec<DerCurvePoints>,
        priority: i32,
        y_unit: DerUnit,
    ) -> Result<Self, ModelError> {
        Self {
            custom_data: None,
            curve_data,
            hysteresis: None,
            priority,
            reactive_power_params: None,
            voltage_params: None,
            y_unit,
            response_time: None,
            start_time: None,
            duration: None,
        }
        .validated()
    }
}
