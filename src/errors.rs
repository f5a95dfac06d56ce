//! Errors for AIS tagging
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AisTaggingError {
    #[error("Invalid enumeration value: {0}")]
    InvalidEnumeration(String),

    #[error("Required input missing: {0}")]
    NullInput(&'static str),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
