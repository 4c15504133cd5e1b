use rocpp_iso15118::exi::BitReader;
use rocpp_iso15118::schema::{
    PriceLevelSchedule, PriceLevelScheduleEntry, PriceRule, PriceSchedule, RationalNumber,
};
use rocpp_iso15118::ExiError;

use crate::harness::{fixtures, harness::init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();

    // 0 written as two groups
    let bytes = hex::decode("8000")?;
    assert!(matches!(
        BitReader::new(&bytes).read_unsigned(),
        Err(ExiError::NonCanonical { position: 0, .. })
    ));

    // string length below the literal offset
    let bytes = hex::decode("01")?;
    assert!(matches!(
        BitReader::new(&bytes).read_string("Currency", 3),
        Err(ExiError::NonCanonical { .. })
    ));

    let bytes = hex::decode("06455552")?;
    assert!(matches!(
        BitReader::new(&bytes).read_string("Currency", 3),
        Err(ExiError::OutOfRange { field: "Currency", .. })
    ));

    let bytes = [0b1010_0001];
    let mut reader = BitReader::new(&bytes);
    reader.read_bits(3)?;
    assert!(matches!(
        reader.finish(),
        Err(ExiError::NonCanonical { position: 3, .. })
    ));

    let bytes = [0b1010_0000, 0x00];
    let mut reader = BitReader::new(&bytes);
    reader.read_bits(3)?;
    assert_eq!(reader.finish(), Err(ExiError::TrailingData { count: 1 }));

    assert_eq!(
        PriceSchedule::decode(&[0x00]),
        Err(ExiError::InvalidHeader { found: 0 })
    );
    assert_eq!(
        PriceSchedule::decode(&[0x80, 0b1000_0000]),
        Err(ExiError::UnknownRoot { code: 2 })
    );

    let valid = fixtures::absolute_schedule_exi();
    let mut trailing = valid.clone();
    trailing.push(0);
    assert_eq!(
        PriceSchedule::decode(&trailing),
        Err(ExiError::TrailingData { count: 1 })
    );
    assert!(matches!(
        PriceSchedule::decode(&valid[..valid.len() - 1]),
        Err(ExiError::UnexpectedEnd { .. })
    ));

    // renewable share above 100 %
    let mut schedule = fixtures::absolute_schedule();
    schedule.price_rule_stacks[0].price_rules[0] = PriceRule {
        renewable_generation_percentage: Some(101),
        ..PriceRule::default()
    };
    assert!(matches!(
        PriceSchedule::Absolute(schedule).encode(),
        Err(ExiError::OutOfRange {
            field: "RenewableGenerationPercentage",
            ..
        })
    ));

    let overfull = PriceLevelSchedule {
        entries: vec![PriceLevelScheduleEntry::default(); 101],
        ..PriceLevelSchedule::default()
    };
    assert!(matches!(
        PriceSchedule::PriceLevel(overfull).encode(),
        Err(ExiError::OutOfRange {
            field: "PriceLevelScheduleEntry",
            ..
        })
    ));

    let empty = PriceLevelSchedule::default();
    assert!(PriceSchedule::PriceLevel(empty).encode().is_err());

    assert_eq!(RationalNumber::default(), fixtures::rational(0, 0));
    Ok(())
}
