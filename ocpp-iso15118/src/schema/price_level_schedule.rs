use super::{narrow, PriceLevelScheduleEntry};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PriceLevelSchedule {
    pub time_anchor: u64,
    pub price_schedule_id: u32,
    pub price_schedule_description: Option<String>,
    pub number_of_price_levels: u8,
    pub entries: Vec<PriceLevelScheduleEntry>,
}

impl ExiFragment for PriceLevelSchedule {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_unsigned(self.time_anchor);
        writer.write_unsigned(u64::from(self.price_schedule_id));
        writer.write_bit(self.price_schedule_description.is_some());
        if let Some(description) = &self.price_schedule_description {
            writer.write_string("PriceScheduleDescription", description, 32)?;
        }
        writer.write_bits(u64::from(self.number_of_price_levels), 8);
        writer.write_array("PriceLevelScheduleEntry", &self.entries, 1, 100)
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let time_anchor = reader.read_unsigned()?;
        let price_schedule_id = narrow("PriceScheduleID", reader.read_unsigned()?)?;
        let price_schedule_description = match reader.read_bit()? {
            true => Some(reader.read_string("PriceScheduleDescription", 32)?),
            false => None,
        };
        Ok(Self {
            time_anchor,
            price_schedule_id,
            price_schedule_description,
            number_of_price_levels: reader.read_bits(8)? as u8,
            entries: reader.read_array(1, 100)?,
        })
    }
}
