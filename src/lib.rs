//! # earsuite
//!
//! Building blocks for object-based audio plugins.
//!
//! ## Architecture
//!
//! `earsuite` is an umbrella crate that re-exports:
//! - **earsuite-core** - Object parameter model and the frontend/backend connector
//! - **earsuite-export** - Streaming PCM writer for rendered stems
//! - **earsuite-params** - Host parameters with internal-set, non-automatable and read-only behaviour
//!
//! ## Quick Start
//!
//! ```
//! use earsuite::prelude::*;
//!
//! let connector = ObjectsConnector::new(|text: &str| println!("{text}"));
//! connector.on_parameter_changed(|id, value| {
//!     println!("{id} -> {value:?}");
//! });
//!
//! connector.notify_parameter_changed(ParameterId::Gain, ParameterValue::Float(0.5));
//! connector.set_status_bar_text("Object updated");
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `export` and `params`
//! - `export` - PCM stem writer (WAV via hound)
//! - `params` - Host parameter types

pub mod error;
pub use error::{Error, Result};

/// Re-export of earsuite-core for direct access
pub use earsuite_core as core;

pub use earsuite_core::{
    ItemColour, ObjectsConnector, ParameterId, ParameterValue, StatusBar, ValueKind,
};

#[cfg(feature = "export")]
pub use earsuite_export as export;

#[cfg(feature = "params")]
pub use earsuite_params as params;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{
        ItemColour, ObjectsConnector, ParameterId, ParameterValue, StatusBar, ValueKind,
    };

    #[cfg(feature = "export")]
    pub use crate::export::{AudioBlock, PcmBlock, PcmFormat, PcmWriter};

    #[cfg(feature = "params")]
    pub use crate::params::{
        AudioParameterBool, AudioParameterInt, HostParameter, InternalSetInt, NonAutomatableBool,
        NonAutomatableInt, ParamChangeCallback, ParameterListener, ReadOnlyInt,
    };
}
