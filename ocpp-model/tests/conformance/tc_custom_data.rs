use rocpp_model::format::json;
use rocpp_model::v21::types::{ChargingProfile, CustomData, CUSTOM_DATA_MAX_DEPTH};
use rocpp_model::{Model, Rule};
use serde_json::{json, Value};

use crate::harness::{
    fixtures,
    harness::{init_logger, violation},
};

fn nested(levels: usize) -> Value {
    (0..levels).fold(json!(1), |inner, _| json!([inner]))
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let data = CustomData::new("com.example.vendor")?
        .with_property("meterId", json!("M-7"))
        .with_property("calibration", json!({"offset": 0.25, "enabled": true}));
    assert_eq!(data.depth(), 2);

    let mut profile = fixtures::tx_default_profile()?;
    profile.custom_data = Some(data.clone());
    let text = json::encode(&profile)?;
    assert!(text.starts_with(r#"{"customData":{"vendorId":"com.example.vendor","#));
    assert!(text.contains(r#""offset":0.25"#));
    let decoded: ChargingProfile = json::decode(&text)?;
    assert_eq!(decoded.custom_data, Some(data));

    let deep = CustomData::new("com.example")?.with_property("tree", nested(CUSTOM_DATA_MAX_DEPTH - 1));
    assert_eq!(deep.depth(), CUSTOM_DATA_MAX_DEPTH);
    assert!(deep.is_valid());

    let too_deep = CustomData::new("com.example")?.with_property("tree", nested(CUSTOM_DATA_MAX_DEPTH));
    let err = violation(too_deep.check());
    assert_eq!(err.field(), Some("properties"));
    assert_eq!(err.rule(), Some(&Rule::Depth { max: 16 }));

    profile.custom_data = Some(too_deep);
    assert_eq!(violation(profile.check()).field(), Some("customData.properties"));

    assert!(CustomData::new("v".repeat(255)).is_ok());
    assert_eq!(violation(CustomData::new("v".repeat(256))).field(), Some("vendorId"));

    let missing_vendor = json::decode::<CustomData>(r#"{"note":"x"}"#);
    assert!(missing_vendor.is_err());
    Ok(())
}
