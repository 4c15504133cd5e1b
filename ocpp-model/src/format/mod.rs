mod config;
pub mod json;

pub use config::CodecConfig;
