use rocpp_iso15118::exi::{BitReader, BitWriter};

use crate::harness::harness::init_logger;

fn written(f: impl FnOnce(&mut BitWriter) -> anyhow::Result<()>) -> anyhow::Result<String> {
    let mut writer = BitWriter::new();
    f(&mut writer)?;
    Ok(hex::encode(writer.finish()))
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert_eq!(written(|w| Ok(w.write_unsigned(0)))?, "00");
    assert_eq!(written(|w| Ok(w.write_unsigned(127)))?, "7f");
    assert_eq!(written(|w| Ok(w.write_unsigned(128)))?, "8001");
    assert_eq!(written(|w| Ok(w.write_unsigned(300)))?, "ac02");

    assert_eq!(written(|w| Ok(w.write_signed(5)))?, "0280");
    assert_eq!(written(|w| Ok(w.write_signed(-1)))?, "8000");

    assert_eq!(written(|w| Ok(w.write_bounded("Exponent", -2, -128, 8)?))?, "7e");
    assert!(written(|w| Ok(w.write_bounded("Exponent", 128, -128, 8)?)).is_err());

    assert_eq!(written(|w| Ok(w.write_string("Currency", "EUR", 3)?))?, "05455552");
    assert!(written(|w| Ok(w.write_string("Currency", "EURO", 3)?)).is_err());

    assert_eq!(written(|w| Ok(w.write_bits(0b101, 3)))?, "a0");
    assert_eq!(hex::encode(BitWriter::document().finish()), "80");

    let bytes = hex::decode("ac02")?;
    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_unsigned()?, 300);
    assert_eq!(reader.position(), 16);
    reader.finish()?;

    let bytes = hex::decode("8000")?;
    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_signed()?, -1);
    reader.finish()?;

    let bytes = hex::decode("05455552")?;
    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_string("Currency", 3)?, "EUR");
    reader.finish()?;

    let bytes = hex::decode("7e")?;
    assert_eq!(BitReader::new(&bytes).read_bounded(-128, 8)?, -2);

    let mut writer = BitWriter::new();
    writer.write_string("PriceScheduleDescription", "Tarif €", 32)?;
    let bytes = writer.finish();
    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_string("PriceScheduleDescription", 32)?, "Tarif €");
    reader.finish()?;

    Ok(())
}
