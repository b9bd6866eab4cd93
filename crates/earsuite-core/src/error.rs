//! Error types for earsuite-core.

use crate::parameter::{ParameterId, ValueKind};
use thiserror::Error;

/// Error type for earsuite-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parameter {id:?} expects a {expected} value, got {found}")]
    ValueKindMismatch {
        id: ParameterId,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Invalid colour: {0}")]
    InvalidColour(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
