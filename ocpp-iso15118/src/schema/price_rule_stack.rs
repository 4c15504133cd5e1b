use super::{narrow, PriceRule};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PriceRuleStack {
    pub duration: u32,
    /// 1 to 8 rules, ordered by `power_range_start`.
    pub price_rules: Vec<PriceRule>,
}

impl ExiFragment for PriceRuleStack {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_unsigned(u64::from(self.duration));
        writer.write_array("PriceRule", &self.price_rules, 1, 8)
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        Ok(Self {
            duration: narrow("Duration", reader.read_unsigned()?)?,
            price_rules: reader.read_array(1, 8)?,
        })
    }
}
