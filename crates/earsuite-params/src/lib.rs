//! # earsuite Params
//!
//! Host-facing plugin parameters.
//!
//! Each parameter is a core ([`IntParameter`], [`BoolParameter`]) that owns
//! the value, the metadata and the listener list, plus a behaviour that
//! runs after every change and before any listener:
//!
//! - [`InternalSetInt`]: remembers whether the last change came from the plugin
//! - [`NonAutomatableInt`] / [`NonAutomatableBool`]: kept off automation lanes
//! - [`ReadOnlyInt`]: only the plugin may change it; host edits snap back
//!
//! ```
//! use earsuite_params::{HostParameter, ReadOnlyInt};
//!
//! let meter = ReadOnlyInt::new("objectCount", "Object count", 0..=10, 5)?;
//! meter.set_value_notifying_host(0.8);
//! assert_eq!(meter.get(), 5);
//!
//! meter.internal_set_int_and_notify_host(7);
//! assert_eq!(meter.get(), 7);
//! # Ok::<(), earsuite_params::ParameterError>(())
//! ```

pub mod behaviour;
pub mod error;
mod host;
mod info;
mod listener;

mod bool_param;
mod int_param;

pub use behaviour::{
    InternalSet, InternalSetter, NonAutomatable, OriginTracking, ParameterBehaviour, Plain,
    ReadOnly, ReadOnlyState,
};
pub use bool_param::BoolParameter;
pub use error::{ParameterError, Result};
pub use host::{HostParameter, ValueHost};
pub use info::{ParameterFlags, ParameterInfo};
pub use int_param::IntParameter;
pub use listener::{ParamChangeCallback, ParameterListener};

pub type AudioParameterInt = IntParameter<Plain>;
pub type AudioParameterBool = BoolParameter<Plain>;
pub type InternalSetInt = IntParameter<InternalSet>;
pub type NonAutomatableInt = IntParameter<NonAutomatable<InternalSet>>;
pub type NonAutomatableBool = BoolParameter<NonAutomatable<Plain>>;
pub type ReadOnlyInt = IntParameter<ReadOnly>;

/// Routing value meaning "all channels of the pack".
pub const CHANNELFORMAT_ALLCHANNELS_ID: i32 = 0;

/// Routing value meaning "no pack format chosen yet".
pub const PACKFORMAT_UNSET_ID: i32 = 0;
