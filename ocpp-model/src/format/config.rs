pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 1024 * 1024;

/// Knobs for [`super::json`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub validate_on_decode: bool,
    pub validate_on_encode: bool,
    pub max_payload_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            validate_on_decode: true,
            validate_on_encode: true,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
    /// Skips the post-decode validation; the caller gets whatever parsed.
    pub fn lenient(mut self) -> Self {
        self.validate_on_decode = false;
        self
    }
    pub fn with_decode_validation(mut self, enabled: bool) -> Self {
        self.validate_on_decode = enabled;
        self
    }
    pub fn with_encode_validation(mut self, enabled: bool) -> Self {
        self.validate_on_encode = enabled;
        self
    }
    pub fn with_max_payload_len(mut self, max_payload_len: usize) -> Self {
        self.max_payload_len = max_payload_len;
        self
    }
}
