use rocpp_model::format::json;
use rocpp_model::v21::messages::set_charging_profile::SetChargingProfileRequest;
use rocpp_model::v21::types::{ChargingProfile, ChargingProfileKind, ChargingRateUnit};
use rocpp_model::{Model, ModelError, Rule};

use crate::harness::{fixtures, harness::init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let profile = fixtures::tx_default_profile()?;
    assert!(profile.is_valid());
    assert_eq!(profile.charging_profile_kind, ChargingProfileKind::Absolute);
    assert_eq!(
        profile.schedule(1).map(|s| s.charging_rate_unit),
        Some(ChargingRateUnit::Watts)
    );

    let text = json::encode(&profile)?;
    assert!(text.contains(r#""limit":11000.0"#));
    assert_eq!(text, fixtures::TX_DEFAULT_PROFILE_JSON);

    let decoded: ChargingProfile = json::decode(fixtures::TX_DEFAULT_PROFILE_JSON)?;
    assert_eq!(decoded, profile);

    let request = SetChargingProfileRequest::new(1, profile.clone())?;
    let text = json::encode(&request)?;
    assert!(text.starts_with(r#"{"evseId":1,"chargingProfile":{"id":1,"#));

    // the public field bypasses the constructor, validation still catches it
    let mut emptied = profile.clone();
    emptied.charging_schedule[0].charging_schedule_period.clear();
    assert!(!emptied.is_valid());
    let err = emptied.check().err().ok_or_else(|| anyhow::anyhow!("accepted"))?;
    assert_eq!(err.field(), Some("chargingSchedule[0].chargingSchedulePeriod"));
    assert_eq!(
        err.rule(),
        Some(&Rule::Cardinality {
            min: Some(1),
            max: Some(1024)
        })
    );
    assert!(matches!(
        json::encode(&emptied),
        Err(ModelError::ConstraintViolation { .. })
    ));

    // the guarded setter refuses and leaves the profile as it was
    let mut guarded = profile.clone();
    let rejected = guarded.charging_schedule[0].set_charging_schedule_period(Vec::new());
    assert!(rejected.is_err());
    assert_eq!(guarded, profile);

    let request = SetChargingProfileRequest {
        charging_profile: emptied,
        ..request
    };
    assert_eq!(
        request.check().err().and_then(|e| e.field().map(str::to_owned)),
        Some("chargingProfile.chargingSchedule[0].chargingSchedulePeriod".to_owned())
    );
    Ok(())
}
