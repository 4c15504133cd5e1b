use rocpp_iso15118::schema::{PriceLevelSchedule, PriceLevelScheduleEntry, PriceSchedule};
use rocpp_iso15118::{exi_to_json, json_to_exi};

use crate::harness::{fixtures::PRICE_LEVEL_SCHEDULE_HEX, harness::init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();
    let schedule = PriceLevelSchedule {
        time_anchor: 0,
        price_schedule_id: 5,
        price_schedule_description: None,
        number_of_price_levels: 3,
        entries: vec![
            PriceLevelScheduleEntry {
                duration: 60,
                price_level: 1,
            },
            PriceLevelScheduleEntry {
                duration: 0,
                price_level: 2,
            },
        ],
    };

    let bytes = PriceSchedule::from(schedule.clone()).encode()?;
    assert_eq!(hex::encode(&bytes), PRICE_LEVEL_SCHEDULE_HEX);
    assert_eq!(
        PriceSchedule::decode(&hex::decode(PRICE_LEVEL_SCHEDULE_HEX)?)?,
        PriceSchedule::PriceLevel(schedule)
    );

    let text = exi_to_json(&bytes)?;
    assert!(text.contains(r#""timeAnchor":"1970-01-01T00:00:00Z""#));
    assert!(text.contains(r#""priceLevelScheduleEntries":[{"duration":60,"priceLevel":1},{"duration":0,"priceLevel":2}]"#));
    assert!(!text.contains("priceScheduleDescription"));
    assert_eq!(json_to_exi(&text)?, bytes);
    Ok(())
}
