use super::RationalNumber;
use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdditionalService {
    pub service_name: String,
    pub service_fee: RationalNumber,
}

impl ExiFragment for AdditionalService {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_string("ServiceName", &self.service_name, 80)?;
        self.service_fee.encode(writer)
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        Ok(Self {
            service_name: reader.read_string("ServiceName", 80)?,
            service_fee: RationalNumber::decode(reader)?,
        })
    }
}
