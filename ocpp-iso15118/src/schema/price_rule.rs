use super::{narrow, RationalNumber};
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PriceRule {
    pub energy_fee: RationalNumber,
    pub parking_fee: Option<RationalNumber>,
    pub parking_fee_period: Option<u32>,
    pub carbon_dioxide_emission: Option<u16>,
    /// 0 to 100.
    pub renewable_generation_percentage: Option<u8>,
    pub power_range_start: RationalNumber,
}

impl ExiFragment for PriceRule {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        self.energy_fee.encode(writer)?;
        writer.write_optional(self.parking_fee.as_ref())?;
        writer.write_bit(self.parking_fee_period.is_some());
        if let Some(period) = self.parking_fee_period {
            writer.write_unsigned(u64::from(period));
        }
        writer.write_bit(self.carbon_dioxide_emission.is_some());
        if let Some(co2) = self.carbon_dioxide_emission {
            writer.write_unsigned(u64::from(co2));
        }
        writer.write_bit(self.renewable_generation_percentage.is_some());
        if let Some(percentage) = self.renewable_generation_percentage {
            if percentage > 100 {
                return Err(ExiError::OutOfRange {
                    field: "RenewableGenerationPercentage",
                    value: percentage.to_string(),
                });
            }
            writer.write_bits(u64::from(percentage), 7);
        }
        self.power_range_start.encode(writer)
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let energy_fee = RationalNumber::decode(reader)?;
        let parking_fee = reader.read_optional()?;
        let parking_fee_period = match reader.read_bit()? {
            true => Some(narrow("ParkingFeePeriod", reader.read_unsigned()?)?),
            false => None,
        };
        let carbon_dioxide_emission = match reader.read_bit()? {
            true => Some(narrow("CarbonDioxideEmission", reader.read_unsigned()?)?),
            false => None,
        };
        let renewable_generation_percentage = match reader.read_bit()? {
            true => {
                let percentage = reader.read_bits(7)?;
                if percentage > 100 {
                    return Err(ExiError::OutOfRange {
                        field: "RenewableGenerationPercentage",
                        value: percentage.to_string(),
                    });
                }
                Some(percentage as u8)
            }
            false => None,
        };
        Ok(Self {
            energy_fee,
            parking_fee,
            parking_fee_period,
            carbon_dioxide_emission,
            renewable_generation_percentage,
            power_range_start: RationalNumber::decode(reader)?,
        })
    }
}
