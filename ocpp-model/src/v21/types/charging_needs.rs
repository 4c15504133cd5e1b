use chrono::{DateTime, Utc};
use validator::Validate;

use super::{
    AcChargingParameters, ControlMode, CustomData, DcChargingParameters, DerChargingParameters,
    EnergyTransferMode, EvEnergyOffer, MobilityNeedsMode, V2xChargingParameters,
};

/// Energy and power the EV asks for, as reported in `NotifyEVChargingNeeds`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChargingNeeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ac_charging_parameters: Option<AcChargingParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub der_charging_parameters: Option<DerChargingParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ev_energy_offer: Option<EvEnergyOffer>,
    pub requested_energy_transfer: EnergyTransferMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub dc_charging_parameters: Option<DcChargingParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub v2x_charging_parameters: Option<V2xChargingParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub available_energy_transfer: Option<Vec<EnergyTransferMode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_mode: Option<ControlMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility_needs_mode: Option<MobilityNeedsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
}

impl ChargingNeeds {
    pub fn new(requested_energy_transfer: EnergyTransferMode) -> Self {
        Self {
            custom_data: None,
            ac_charging_parameters: None,
            der_charging_parameters: None,
            ev_energy_offer: None,
            requested_energy_transfer,
            dc_charging_parameters: None,
            v2x_charging_parameters: None,
            available_energy_transfer: None,
            control_mode: None,
            mobility_needs_mode: None,
            departure_time: None,
        }
    }
}
