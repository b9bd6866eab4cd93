//! Host parameter capability.

use crate::info::ParameterInfo;
use crate::listener::ParameterListener;
use std::sync::Arc;

/// What the plugin host sees of a parameter.
///
/// Values crossing this interface are normalized to 0.0-1.0. All methods
/// are callable from any thread.
pub trait HostParameter: Send + Sync {
    fn info(&self) -> &ParameterInfo;

    /// Position in the plugin's parameter list.
    fn index(&self) -> usize {
        self.info().index
    }

    /// Current normalized value.
    fn value(&self) -> f32;

    /// Normalized default value.
    fn default_value(&self) -> f32;

    /// Store a value coming from the host. Listeners are not notified.
    fn set_value(&self, normalized: f32);

    /// Store a value and notify every listener, the host included.
    fn set_value_notifying_host(&self, normalized: f32);

    fn begin_change_gesture(&self);

    fn end_change_gesture(&self);

    /// Whether the host may expose this parameter on an automation lane.
    fn is_automatable(&self) -> bool;

    fn add_listener(&self, listener: Arc<dyn ParameterListener>);

    fn remove_listener(&self, listener: &Arc<dyn ParameterListener>);

    /// Display text for a normalized value.
    fn text_for_value(&self, normalized: f32, maximum_length: usize) -> String;

    /// Normalized value for display text, `None` if it does not parse.
    fn value_for_text(&self, text: &str) -> Option<f32>;
}

/// Plain-value access handed to a behaviour's change hook.
pub trait ValueHost<T> {
    fn current(&self) -> T;

    /// Set a plain value through the full notifying path.
    fn set_notifying_host(&self, value: T);
}
