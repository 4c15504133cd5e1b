use super::{narrow, RationalNumber};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OverstayRule {
    pub overstay_rule_description: Option<String>,
    pub start_time: u32,
    pub overstay_fee: RationalNumber,
    pub overstay_fee_period: u32,
}

impl ExiFragment for OverstayRule {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_bit(self.overstay_rule_description.is_some());
        if let Some(description) = &self.overstay_rule_description {
            writer.write_string("OverstayRuleDescription", description, 32)?;
        }
        writer.write_unsigned(u64::from(self.start_time));
        self.overstay_fee.encode(writer)?;
        writer.write_unsigned(u64::from(self.overstay_fee_period));
        Ok(())
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let overstay_rule_description = match reader.read_bit()? {
            true => Some(reader.read_string("OverstayRuleDescription", 32)?),
            false => None,
        };
        Ok(Self {
            overstay_rule_description,
            start_time: narrow("StartTime", reader.read_unsigned()?)?,
            overstay_fee: RationalNumber::decode(reader)?,
            overstay_fee_period: narrow("OverstayFeePeriod", reader.read_unsigned()?)?,
        })
    }
}
