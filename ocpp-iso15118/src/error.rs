use rocpp_model::ModelError;

/// Failure while reading or writing the EXI form of a price schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExiError {
    #[error("unexpected end of stream at bit {position}")]
    UnexpectedEnd { position: usize },

    #[error("invalid header byte {found:#04x}")]
    InvalidHeader { found: u8 },

    #[error("unknown root element event code {code}")]
    UnknownRoot { code: u64 },

    #[error("non-canonical encoding at bit {position}: {detail}")]
    NonCanonical {
        position: usize,
        detail: &'static str,
    },

    #[error("`{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("invalid character code point {code}")]
    InvalidChar { code: u64 },

    #[error("{count} trailing bytes after the document")]
    TrailingData { count: usize },
}

/// Mismatch between the OCPP and the ISO 15118-20 representation of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("`{field}` does not fit the ISO 15118-20 range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("`{field}` carries customData, which has no ISO 15118-20 counterpart")]
    CustomData { field: String },

    #[error("timeAnchor {value} has sub-second precision")]
    SubSecond { value: String },

    #[error("payload is neither an absolute nor a price level schedule")]
    UnknownSchedule,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Exi(#[from] ExiError),
}
