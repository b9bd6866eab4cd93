//! Centralized error type for the earsuite umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] earsuite_core::Error),

    #[cfg(feature = "export")]
    #[error("Export: {0}")]
    Export(#[from] earsuite_export::ExportError),

    #[cfg(feature = "params")]
    #[error("Parameter: {0}")]
    Params(#[from] earsuite_params::ParameterError),
}

pub type Result<T> = std::result::Result<T, Error>;
