use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use rocpp_model::v21::types::{ChargingSchedulePeriod, CustomData};
use rocpp_model::Decimal;
use serde_json::json;

use crate::harness::{fixtures, harness::init_logger};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let a = fixtures::tx_default_profile()?;
    let b = fixtures::tx_default_profile()?;
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut first = fixtures::schedule(
        1,
        vec![
            ChargingSchedulePeriod::with_limit(0, Decimal::from(16)),
            ChargingSchedulePeriod::with_limit(900, Decimal::from(32)),
        ],
    )?;
    let mut reordered = first.clone();
    reordered.charging_schedule_period.reverse();
    assert_ne!(first, reordered);
    reordered.charging_schedule_period.reverse();
    assert_eq!(first, reordered);

    first.custom_data = Some(CustomData::new("com.example")?.with_property("note", json!("a")));
    assert_ne!(first, reordered);

    let set: HashSet<_> = [a.clone(), b, a].into_iter().collect();
    assert_eq!(set.len(), 1);

    let data = CustomData::new("com.example")?
        .with_property("x", json!(1))
        .with_property("y", json!([1, 2]));
    let same = CustomData::new("com.example")?
        .with_property("y", json!([1, 2]))
        .with_property("x", json!(1));
    assert_eq!(data, same);
    assert_eq!(hash_of(&data), hash_of(&same));
    Ok(())
}
