//! Error types for earsuite-export

use crate::options::PcmFormat;
use std::io;
use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid audio data
    #[error("Invalid audio data: {0}")]
    InvalidData(String),

    /// Block format differs from the format the output was opened with
    #[error("Block format {found} does not match output format {expected}")]
    FormatMismatch {
        expected: PcmFormat,
        found: PcmFormat,
    },

    /// Writing the block would push the data chunk past what the
    /// container's 32-bit size fields can describe
    #[error("Output would exceed the {limit} byte data limit ({written} bytes written)")]
    SizeLimit { limit: u64, written: u64 },
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(feature = "wav")]
impl From<hound::Error> for ExportError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(e) => ExportError::Io(e),
            other => ExportError::Encoding(other.to_string()),
        }
    }
}
