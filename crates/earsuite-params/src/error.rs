//! Error types for parameter construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Invalid range: min={min}, max={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Default {default} outside range {min}..={max}")]
    DefaultOutOfRange { default: i32, min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, ParameterError>;
