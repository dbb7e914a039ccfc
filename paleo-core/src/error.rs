//! Error types

use thiserror::Error;

/// Failure of a recognition call.
///
/// libsr reports nothing beyond its result code, so a sentinel or
/// out-of-range code carries no further detail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    /// The native classifier returned a code outside the valid gesture range
    #[error("unknown error")]
    Unknown,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Well-formed but invalid values
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for recognition
pub type Result<T> = std::result::Result<T, RecognitionError>;

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
