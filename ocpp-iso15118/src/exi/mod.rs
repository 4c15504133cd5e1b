//! Schema-informed, bit-packed EXI primitives.
//!
//! Presence flags and array continuation flags are single bits where `1` means "present" or
//! "another item follows". Encodings are canonical: the reader rejects every form the writer
//! would not have produced, so a decode/encode cycle reproduces the input bytes.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

use crate::error::ExiError;

/// EXI header octet: distinguishing bits `10`, no options, format version 1.
pub const EXI_HEADER: u8 = 0x80;

/// An element with a fixed EXI grammar.
pub trait ExiFragment: Sized {
    fn encode(&self, writer: &mut BitWriter) -> Result<(), ExiError>;
    fn decode(reader: &mut BitReader<'_>) -> Result<Self, ExiError>;
}
