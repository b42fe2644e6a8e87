//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Standard meridian must lie within -180..=180 degrees, got {0}")]
    InvalidStandardMeridian(f64),

    #[error("Timeline length must be between 1 and {max} years, got {actual}")]
    InvalidTimelineYears { max: u32, actual: u32 },

    #[error("Log filter directive must not be empty")]
    EmptyLogLevel,
}
