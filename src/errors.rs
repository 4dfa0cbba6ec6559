// src/errors.rs
use thiserror::Error;

/// Failures of a single catch-up computation. None of them are retried:
/// the same inputs always fail the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Insufficient data: {required} points required, {available} available")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid growth rate {rate}: must be finite and greater than -100%")]
    InvalidRate { rate: f64 },

    #[error("Unknown country: {country}")]
    UnknownCountry { country: String },

    #[error("Unknown growth rate: {key}")]
    UnknownGrowthRate { key: String },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
