use super::{narrow, OverstayRule, RationalNumber};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OverstayRuleList {
    pub overstay_time_threshold: Option<u32>,
    pub overstay_power_threshold: Option<RationalNumber>,
    pub overstay_rules: Vec<OverstayRule>,
}

impl ExiFragment for OverstayRuleList {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_bit(self.overstay_time_threshold.is_some());
        if let Some(threshold) = self.overstay_time_threshold {
            writer.write_unsigned(u64::from(threshold));
        }
        writer.write_optional(self.overstay_power_threshold.as_ref())?;
        writer.write_array("OverstayRule", &self.overstay_rules, 1, 5)
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let overstay_time_threshold = match reader.read_bit()? {
            true => Some(narrow("OverstayTimeThreshold", reader.read_unsigned()?)?),
            false => None,
        };
        Ok(Self {
            overstay_time_threshold,
            overstay_power_threshold: reader.read_optional()?,
            overstay_rules: reader.read_array(1, 5)?,
        })
    }
}
