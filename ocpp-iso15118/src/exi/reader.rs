use super::{ExiFragment, EXI_HEADER};
use crate::error::ExiError;

#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Reader positioned after a validated document header.
    pub fn document(bytes: &'a [u8]) -> Result<Self, ExiError> {
        let mut reader = Self::new(bytes);
        let header = reader.read_bits(8)? as u8;
        if header != EXI_HEADER {
            return Err(ExiError::InvalidHeader { found: header });
        }
        Ok(reader)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_bit(&mut self) -> Result<bool, ExiError> {
        let byte = self
            .bytes
            .get(self.pos / 8)
            .ok_or(ExiError::UnexpectedEnd { position: self.pos })?;
        let bit = (byte >> (7 - self.pos % 8)) & 1 == 1;
        self.pos += 1;
        Ok(bit)
    }

    pub fn read_bits(&mut self, n: u8) -> Result<u64, ExiError> {
        let mut value = 0u64;
        for _ in 0..n {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool, ExiError> {
        self.read_bit()
    }

    pub fn read_unsigned(&mut self) -> Result<u64, ExiError> {
        let start = self.pos;
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            let octet = self.read_bits(8)?;
            let group = octet & 0x7f;
            if shift >= 64 || (shift > 57 && group >> (64 - shift) != 0) {
                return Err(ExiError::OutOfRange {
                    field: "unsignedInteger",
                    value: format!("more than 64 bits at bit {start}"),
                });
            }
            value |= group << shift;
            if octet & 0x80 == 0 {
                if group == 0 && shift > 0 {
                    return Err(ExiError::NonCanonical {
                        position: start,
                        detail: "unsigned integer ends in a zero group",
                    });
                }
                return Ok(value);
            }
            shift += 7;
        }
    }

    pub fn read_signed(&mut self) -> Result<i64, ExiError> {
        let negative = self.read_bit()?;
        let magnitude = self.read_unsigned()?;
        let magnitude = i64::try_from(magnitude).map_err(|_| ExiError::OutOfRange {
            field: "integer",
            value: magnitude.to_string(),
        })?;
        Ok(if negative { -magnitude - 1 } else { magnitude })
    }

    pub fn read_bounded(&mut self, min: i64, n: u8) -> Result<i64, ExiError> {
        Ok(min + self.read_bits(n)? as i64)
    }

    pub fn read_string(&mut self, field: &'static str, max_chars: usize) -> Result<String, ExiError> {
        let start = self.pos;
        let len = self.read_unsigned()?;
        let count = len.checked_sub(2).ok_or(ExiError::NonCanonical {
            position: start,
            detail: "string table reference",
        })?;
        if count > max_chars as u64 {
            return Err(ExiError::OutOfRange {
                field,
                value: format!("{count} characters"),
            });
        }
        let mut out = String::with_capacity(count as usize);
        for _ in 0..count {
            let code = self.read_unsigned()?;
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or(ExiError::InvalidChar { code })?;
            out.push(c);
        }
        Ok(out)
    }

    pub fn read_optional<T: ExiFragment>(&mut self) -> Result<Option<T>, ExiError> {
        if self.read_bit()? {
            T::decode(self).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn read_array<T: ExiFragment>(&mut self, min: usize, max: usize) -> Result<Vec<T>, ExiError> {
        let mut items = Vec::with_capacity(min);
        for _ in 0..min {
            items.push(T::decode(self)?);
        }
        while items.len() < max && self.read_bit()? {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }

    /// Checks that only zero padding follows the current position.
    pub fn finish(self) -> Result<(), ExiError> {
        let offset = self.pos % 8;
        if offset != 0 {
            let current = self.bytes.get(self.pos / 8).copied().unwrap_or(0);
            if current & (0xff >> offset) != 0 {
                return Err(ExiError::NonCanonical {
                    position: self.pos,
                    detail: "non-zero padding",
                });
            }
        }
        let used = self.pos.div_ceil(8);
        if used < self.bytes.len() {
            return Err(ExiError::TrailingData {
                count: self.bytes.len() - used,
            });
        }
        Ok(())
    }
}
