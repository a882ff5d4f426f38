//! Error types for zero-hour computations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZeroHourError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ZeroHourError>;
