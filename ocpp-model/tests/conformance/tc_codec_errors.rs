use rocpp_model::format::{json, CodecConfig};
use rocpp_model::v21::messages::set_charging_profile::SetChargingProfileRequest;
use rocpp_model::v21::types::ChargingProfile;
use rocpp_model::{ModelError, SchemaViolationKind};

use crate::harness::{fixtures, harness::init_logger};

fn rejected(payload: &str) -> ModelError {
    match json::decode::<SetChargingProfileRequest>(payload) {
        Err(err) => err,
        Ok(value) => panic!("accepted {value:?}"),
    }
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let valid = format!(
        r#"{{"evseId":2,"chargingProfile":{}}}"#,
        fixtures::TX_DEFAULT_PROFILE_JSON
    );
    let request: SetChargingProfileRequest = json::decode(&valid)?;
    assert_eq!(request.evse_id, 2);

    assert_eq!(
        rejected(r#"{"chargingProfile":{"id":1}}"#),
        ModelError::missing_field("chargingProfile.stackLevel")
    );
    assert_eq!(
        rejected(&valid.replace(r#""evseId":2,"#, "")),
        ModelError::missing_field("evseId")
    );

    let err = rejected(&valid.replace(r#""startPeriod":0"#, r#""startPeriod":"0""#));
    assert_eq!(
        err.field(),
        Some("chargingProfile.chargingSchedule[0].chargingSchedulePeriod[0].startPeriod")
    );
    assert!(matches!(
        err,
        ModelError::SchemaViolation {
            kind: SchemaViolationKind::InvalidType { .. },
            ..
        }
    ));

    for payload in [&valid[..valid.len() - 1], "{\"evseId\":", "not json"] {
        assert!(
            matches!(
                rejected(payload),
                ModelError::SchemaViolation {
                    kind: SchemaViolationKind::Malformed { .. },
                    ..
                }
            ),
            "{payload}"
        );
    }
    assert!(matches!(
        rejected(&format!("{valid} trailing")),
        ModelError::SchemaViolation {
            kind: SchemaViolationKind::Malformed { .. },
            ..
        }
    ));

    let tight = CodecConfig::new().with_max_payload_len(16);
    assert_eq!(
        json::decode_with::<SetChargingProfileRequest>(&valid, &tight),
        Err(ModelError::PayloadTooLarge {
            len: valid.len(),
            max: 16
        })
    );

    // bounds are checked after parsing unless the caller opts out
    let negative = valid.replace(r#""stackLevel":0"#, r#""stackLevel":-5"#);
    assert_eq!(
        rejected(&negative).field(),
        Some("chargingProfile.stackLevel")
    );
    let lenient: SetChargingProfileRequest =
        json::decode_with(&negative, &CodecConfig::default().lenient())?;
    assert_eq!(lenient.charging_profile.stack_level, -5);
    assert!(json::encode(&lenient).is_err());
    let unchecked = CodecConfig::default().with_encode_validation(false);
    assert!(json::encode_with(&lenient, &unchecked)?.contains(r#""stackLevel":-5"#));

    let tree = serde_json::from_str(fixtures::TX_DEFAULT_PROFILE_JSON)?;
    let profile: ChargingProfile = json::decode_value(tree)?;
    assert_eq!(profile, fixtures::tx_default_profile()?);
    Ok(())
}
