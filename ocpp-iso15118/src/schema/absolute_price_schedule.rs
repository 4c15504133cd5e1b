use super::{narrow, AdditionalService, OverstayRuleList, PriceRuleStack, RationalNumber, TaxRule};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AbsolutePriceSchedule {
    /// Seconds since the Unix epoch.
    pub time_anchor: u64,
    pub price_schedule_id: u32,
    pub price_schedule_description: Option<String>,
    pub currency: String,
    pub language: String,
    pub price_algorithm: String,
    pub minimum_cost: Option<RationalNumber>,
    pub maximum_cost: Option<RationalNumber>,
    pub tax_rules: Option<Vec<TaxRule>>,
    pub price_rule_stacks: Vec<PriceRuleStack>,
    pub overstay_rules: Option<OverstayRuleList>,
    pub additional_selected_services: Option<Vec<AdditionalService>>,
}

impl ExiFragment for AbsolutePriceSchedule {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_unsigned(self.time_anchor);
        writer.write_unsigned(u64::from(self.price_schedule_id));
        writer.write_bit(self.price_schedule_description.is_some());
        if let Some(description) = &self.price_schedule_description {
            writer.write_string("PriceScheduleDescription", description, 160)?;
        }
        writer.write_string("Currency", &self.currency, 3)?;
        writer.write_string("Language", &self.language, 8)?;
        writer.write_string("PriceAlgorithm", &self.price_algorithm, 2000)?;
        writer.write_optional(self.minimum_cost.as_ref())?;
        writer.write_optional(self.maximum_cost.as_ref())?;
        writer.write_bit(self.tax_rules.is_some());
        if let Some(rules) = &self.tax_rules {
            writer.write_array("TaxRule", rules, 1, 10)?;
        }
        writer.write_array("PriceRuleStack", &self.price_rule_stacks, 1, 1024)?;
        writer.write_optional(self.overstay_rules.as_ref())?;
        writer.write_bit(self.additional_selected_services.is_some());
        if let Some(services) = &self.additional_selected_services {
            writer.write_array("AdditionalService", services, 1, 5)?;
        }
        Ok(())
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let time_anchor = reader.read_unsigned()?;
        let price_schedule_id = narrow("PriceScheduleID", reader.read_unsigned()?)?;
        let price_schedule_description = match reader.read_bit()? {
            true => Some(reader.read_string("PriceScheduleDescription", 160)?),
            false => None,
        };
        let currency = reader.read_string("Currency", 3)?;
        let language = reader.read_string("Language", 8)?;
        let price_algorithm = reader.read_string("PriceAlgorithm", 2000)?;
        let minimum_cost = reader.read_optional()?;
        let maximum_cost = reader.read_optional()?;
        let tax_rules = match reader.read_bit()? {
            true => Some(reader.read_array(1, 10)?),
            false => None,
        };
        let price_rule_stacks = reader.read_array(1, 1024)?;
        let overstay_rules = reader.read_optional()?;
        let additional_selected_services = match reader.read_bit()? {
            true => Some(reader.read_array(1, 5)?),
            false => None,
        };
        Ok(Self {
            time_anchor,
            price_schedule_id,
            price_schedule_description,
            currency,
            language,
            price_algorithm,
            minimum_cost,
            maximum_cost,
            tax_rules,
            price_rule_stacks,
            overstay_rules,
            additional_selected_services,
        })
    }
}
