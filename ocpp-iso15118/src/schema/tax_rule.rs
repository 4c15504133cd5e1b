use super::{narrow, RationalNumber};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TaxRule {
    pub tax_rule_id: u32,
    pub tax_rule_name: Option<String>,
    pub tax_rate: RationalNumber,
    pub tax_included_in_price: Option<bool>,
    pub applies_to_energy_fee: bool,
    pub applies_to_parking_fee: bool,
    pub applies_to_overstay_fee: bool,
    pub applies_minimum_maximum_cost: bool,
}

impl ExiFragment for TaxRule {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_unsigned(u64::from(self.tax_rule_id));
        writer.write_bit(self.tax_rule_name.is_some());
        if let Some(name) = &self.tax_rule_name {
            writer.write_string("TaxRuleName", name, 100)?;
        }
        self.tax_rate.encode(writer)?;
        writer.write_bit(self.tax_included_in_price.is_some());
        if let Some(included) = self.tax_included_in_price {
            writer.write_bool(included);
        }
        writer.write_bool(self.applies_to_energy_fee);
        writer.write_bool(self.applies_to_parking_fee);
        writer.write_bool(self.applies_to_overstay_fee);
        writer.write_bool(self.applies_minimum_maximum_cost);
        Ok(())
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let tax_rule_id = narrow("TaxRuleID", reader.read_unsigned()?)?;
        let tax_rule_name = match reader.read_bit()? {
            true => Some(reader.read_string("TaxRuleName", 100)?),
            false => None,
        };
        let tax_rate = RationalNumber::decode(reader)?;
        let tax_included_in_price = match reader.read_bit()? {
            true => Some(reader.read_bool()?),
            false => None,
        };
        Ok(Self {
            tax_rule_id,
            tax_rule_name,
            tax_rate,
            tax_included_in_price,
            applies_to_energy_fee: reader.read_bool()?,
            applies_to_parking_fee: reader.read_bool()?,
            applies_to_overstay_fee: reader.read_bool()?,
            applies_minimum_maximum_cost: reader.read_bool()?,
        })
    }
}
