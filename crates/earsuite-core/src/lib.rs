//! Object parameter model and frontend/backend connector.
//!
//! # Primary API
//!
//! - [`ObjectsConnector`]: sole interface between backend object logic and the editor
//! - [`ParameterId`] / [`ParameterValue`]: what changed and its new value
//! - [`StatusBar`]: editor-side hook for status text
//! - [`ItemColour`]: colour payload of [`ParameterId::Colour`]

pub mod error;
pub use error::{Error, Result};

mod parameter;
pub use parameter::{ParameterId, ParameterValue, ValueKind};

mod colour;
pub use colour::ItemColour;

mod connector;
pub use connector::{ObjectsConnector, StatusBar};
