use super::{AbsolutePriceSchedule, PriceLevelSchedule};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

const ROOT_EVENT_BITS: u8 = 2;
const ABSOLUTE: u64 = 0;
const PRICE_LEVEL: u64 = 1;

/// Document root: one price schedule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PriceSchedule {
    Absolute(AbsolutePriceSchedule),
    PriceLevel(PriceLevelSchedule),
}

impl PriceSchedule {
    pub fn encode(&self) -> Result<Vec<u8>, ExiError> {
        let mut writer = BitWriter::document();
        match self {
            PriceSchedule::Absolute(schedule) => {
                writer.write_bits(ABSOLUTE, ROOT_EVENT_BITS);
                schedule.encode(&mut writer)?;
            }
            PriceSchedule::PriceLevel(schedule) => {
                writer.write_bits(PRICE_LEVEL, ROOT_EVENT_BITS);
                schedule.encode(&mut writer)?;
            }
        }
        log::trace!("encoded price schedule into {} bits", writer.bit_len());
        Ok(writer.finish())
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ExiError> {
        let mut reader = BitReader::document(bytes)?;
        let schedule = match reader.read_bits(ROOT_EVENT_BITS)? {
            ABSOLUTE => PriceSchedule::Absolute(AbsolutePriceSchedule::decode(&mut reader)?),
            PRICE_LEVEL => PriceSchedule::PriceLevel(PriceLevelSchedule::decode(&mut reader)?),
            code => return Err(ExiError::UnknownRoot { code }),
        };
        reader.finish()?;
        Ok(schedule)
    }
}

impl From<AbsolutePriceSchedule> for PriceSchedule {
    fn from(value: AbsolutePriceSchedule) -> Self {
        PriceSchedule::Absolute(value)
    }
}

impl From<PriceLevelSchedule> for PriceSchedule {
    fn from(value: PriceLevelSchedule) -> Self {
        PriceSchedule::PriceLevel(value)
    }
}
