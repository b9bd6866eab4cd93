//! Object metadata parameters exchanged between backend and frontend.
//!
//! Every change of an object's metadata is reported as a
//! ([`ParameterId`], [`ParameterValue`]) pair. Each id travels with exactly
//! one [`ValueKind`]; values are never coerced between kinds.
//!
//! # Example
//!
//! ```
//! use earsuite_core::{ParameterId, ParameterValue, ValueKind};
//!
//! let gain = ParameterValue::from(0.5f32);
//! assert!(ParameterId::Gain.accepts(&gain));
//! assert_eq!(gain.as_float(), Some(0.5));
//! assert_eq!(gain.as_int(), None);
//!
//! assert_eq!(ParameterId::Name.value_kind(), ValueKind::Text);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which object parameter changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterId {
    Routing,
    Name,
    Colour,
    Gain,
    Azimuth,
    Elevation,
    Distance,
    Width,
    Height,
    Depth,
    Diffuse,
    Factor,
    Range,
}

impl ParameterId {
    /// All ids, in declaration order.
    pub const ALL: [ParameterId; 13] = [
        ParameterId::Routing,
        ParameterId::Name,
        ParameterId::Colour,
        ParameterId::Gain,
        ParameterId::Azimuth,
        ParameterId::Elevation,
        ParameterId::Distance,
        ParameterId::Width,
        ParameterId::Height,
        ParameterId::Depth,
        ParameterId::Diffuse,
        ParameterId::Factor,
        ParameterId::Range,
    ];

    /// The value kind this parameter is conventionally reported with.
    ///
    /// Advisory only: the connector delivers any pairing. Divergence
    /// (`Factor`, `Range`) is optional on an object, so it is usually
    /// carried as an optional float.
    pub const fn value_kind(self) -> ValueKind {
        match self {
            ParameterId::Routing => ValueKind::Int,
            ParameterId::Name => ValueKind::Text,
            ParameterId::Colour => ValueKind::UInt,
            ParameterId::Gain
            | ParameterId::Azimuth
            | ParameterId::Elevation
            | ParameterId::Distance
            | ParameterId::Width
            | ParameterId::Height
            | ParameterId::Depth
            | ParameterId::Diffuse => ValueKind::Float,
            ParameterId::Factor | ParameterId::Range => ValueKind::OptionalFloat,
        }
    }

    /// Whether `value` has this parameter's conventional kind.
    #[inline]
    pub fn accepts(self, value: &ParameterValue) -> bool {
        value.kind() == self.value_kind()
    }

    /// Check the pairing of this id with `value`.
    pub fn check(self, value: &ParameterValue) -> Result<()> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(Error::ValueKindMismatch {
                id: self,
                expected: self.value_kind(),
                found: value.kind(),
            })
        }
    }

    /// Stable lowercase name, used in log output.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParameterId::Routing => "routing",
            ParameterId::Name => "name",
            ParameterId::Colour => "colour",
            ParameterId::Gain => "gain",
            ParameterId::Azimuth => "azimuth",
            ParameterId::Elevation => "elevation",
            ParameterId::Distance => "distance",
            ParameterId::Width => "width",
            ParameterId::Height => "height",
            ParameterId::Depth => "depth",
            ParameterId::Diffuse => "diffuse",
            ParameterId::Factor => "factor",
            ParameterId::Range => "range",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`ParameterValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Float,
    Bool,
    Int,
    UInt,
    OptionalFloat,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Float => write!(f, "float"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::UInt => write!(f, "unsigned int"),
            ValueKind::OptionalFloat => write!(f, "optional float"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// New value of an object parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Float(f32),
    Bool(bool),
    Int(i32),
    UInt(u32),
    OptionalFloat(Option<f32>),
    Text(String),
}

impl ParameterValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ParameterValue::Float(_) => ValueKind::Float,
            ParameterValue::Bool(_) => ValueKind::Bool,
            ParameterValue::Int(_) => ValueKind::Int,
            ParameterValue::UInt(_) => ValueKind::UInt,
            ParameterValue::OptionalFloat(_) => ValueKind::OptionalFloat,
            ParameterValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            ParameterValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            ParameterValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            ParameterValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u32> {
        match *self {
            ParameterValue::UInt(v) => Some(v),
            _ => None,
        }
    }

    /// The optional float payload.
    ///
    /// The outer `Option` is `None` when the value is another kind; the
    /// inner one is the payload itself.
    pub fn as_optional_float(&self) -> Option<Option<f32>> {
        match *self {
            ParameterValue::OptionalFloat(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParameterValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f32> for ParameterValue {
    fn from(v: f32) -> Self {
        ParameterValue::Float(v)
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        ParameterValue::Bool(v)
    }
}

impl From<i32> for ParameterValue {
    fn from(v: i32) -> Self {
        ParameterValue::Int(v)
    }
}

impl From<u32> for ParameterValue {
    fn from(v: u32) -> Self {
        ParameterValue::UInt(v)
    }
}

impl From<Option<f32>> for ParameterValue {
    fn from(v: Option<f32>) -> Self {
        ParameterValue::OptionalFloat(v)
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        ParameterValue::Text(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::Text(v.to_owned())
    }
}
