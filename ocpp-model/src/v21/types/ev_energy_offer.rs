use validator::Validate;

use super::{CustomData, EvAbsolutePriceSchedule, EvPowerSchedule};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvEnergyOffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub custom_data: Option<CustomData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ev_absolute_price_schedule: Option<EvAbsolutePriceSchedule>,
    #[validate(nested)]
    pub ev_power_schedule: EvPowerSchedule,
}

impl EvEnergyOffer {
    pub fn new(ev_power_schedule: EvPowerSchedule) -> Self {
        Self {
            custom_data: None,
            ev_absolute_price_schedule: None,
            ev_power_schedule,
        }
    }
}
