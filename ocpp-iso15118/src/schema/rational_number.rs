use crate::error::ExiError;
use crate::exi::{BitReader, BitWriter, ExiFragment};

/// `Value * 10^Exponent`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RationalNumber {
    pub exponent: i8,
    pub value: i16,
}

impl ExiFragment for RationalNumber {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError> {
        writer.write_bounded("Exponent", i64::from(self.exponent), -128, 8)?;
        writer.write_signed(i64::from(self.value));
        Ok(())
    }

    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError> {
        let exponent = reader.read_bounded(-128, 8)?;
        let value = reader.read_signed()?;
        Ok(Self {
            exponent: i8::try_from(exponent).map_err(|_| ExiError::OutOfRange {
                field: "Exponent",
                value: exponent.to_string(),
            })?,
            value: i16::try_from(value).map_err(|_| ExiError::OutOfRange {
                field: "Value",
                value: value.to_string(),
            })?,
        })
    }
}
