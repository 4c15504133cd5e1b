use super::narrow;
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PriceLevelScheduleEntry {
    pub duration: u32,
    pub price_level: u8,
}

impl ExiFragment for PriceLevelScheduleEntry {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_unsigned(u64::from(self.duration));
        writer.write_bits(u64::from(self.price_level), 8);
        Ok(())
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        Ok(Self {
            duration: narrow("Duration", reader.read_unsigned()?)?,
            price_level: reader.read_bits(8)? as u8,
        })
    }
}
