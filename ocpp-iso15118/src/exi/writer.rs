use super::{ExiFragment, EXI_HEADER};
use crate::error::ExiError;

#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer positioned after the document header.
    pub fn document() -> Self {
        let mut writer = Self::new();
        writer.write_bits(u64::from(EXI_HEADER), 8);
        writer
    }

    /// Bits written so far.
    pub fn bit_len(&self) -> usize {
        self.len
    }

    pub fn write_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Lowest `n` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u64, n: u8) {
        for i in (0..n).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_bit(value);
    }

    /// Unsigned integer in 7 bit groups, least significant group first. The high bit of each
    /// octet flags that another group follows.
    pub fn write_unsigned(&mut self, mut value: u64) {
        loop {
            let group = value & 0x7f;
            value >>= 7;
            if value == 0 {
                self.write_bits(group, 8);
                return;
            }
            self.write_bits(0x80 | group, 8);
        }
    }

    /// Sign bit, then the magnitude; negative values store `|value| - 1`.
    pub fn write_signed(&mut self, value: i64) {
        if value < 0 {
            self.write_bit(true);
            self.write_unsigned(value.unsigned_abs() - 1);
        } else {
            self.write_bit(false);
            self.write_unsigned(value.unsigned_abs());
        }
    }

    /// Bounded integer in `[min, min + 2^n)`, stored as its offset from `min` in `n` bits.
    pub fn write_bounded(
        &mut self,
        field: &'static str,
        value: i64,
        min: i64,
        n: u8,
    ) -> Result<(), ExiError> {
        let offset = value
            .checked_sub(min)
            .filter(|o| *o >= 0 && (*o as u64) < (1u64 << n))
            .ok_or_else(|| ExiError::OutOfRange {
                field,
                value: value.to_string(),
            })?;
        self.write_bits(offset as u64, n);
        Ok(())
    }

    /// Literal string: character count plus two, then each code point as an unsigned integer.
    pub fn write_string(
        &mut self,
        field: &'static str,
        value: &str,
        max_chars: usize,
    ) -> Result<(), ExiError> {
        let count = value.chars().count();
        if count > max_chars {
            return Err(ExiError::OutOfRange {
                field,
                value: format!("{count} characters"),
            });
        }
        self.write_unsigned(count as u64 + 2);
        for c in value.chars() {
            self.write_unsigned(u64::from(u32::from(c)));
        }
        Ok(())
    }

    /// Presence bit followed by the element, if any.
    pub fn write_optional<T: ExiFragment>(&mut self, value: Option<&T>) -> Result<(), ExiError> {
        self.write_bit(value.is_some());
        match value {
            Some(v) => v.encode(self),
            None => Ok(()),
        }
    }

    /// `min` mandatory items, then a continuation bit before each further item until `max`
    /// is reached.
    pub fn write_array<T: ExiFragment>(
        &mut self,
        field: &'static str,
        items: &[T],
        min: usize,
        max: usize,
    ) -> Result<(), ExiError> {
        if items.len() < min || items.len() > max {
            return Err(ExiError::OutOfRange {
                field,
                value: format!("{} items", items.len()),
            });
        }
        for (i, item) in items.iter().enumerate() {
            if i >= min {
                self.write_bit(true);
            }
            item.encode(self)?;
        }
        if items.len() < max {
            self.write_bit(false);
        }
        Ok(())
    }

    /// The encoded bytes; the last one is zero padded.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
