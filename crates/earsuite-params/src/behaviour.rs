//! Change hooks that customise how a parameter reacts to new values.
//!
//! A behaviour runs inside the parameter after a value is stored and before
//! any listener hears about it. It may record where the change came from or
//! push a different value back through the parameter.

use crate::host::ValueHost;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait ParameterBehaviour<T>: Send + Sync {
    /// Called once with the default value when the parameter is built.
    fn init(&mut self, _default: T) {}

    /// Runs after a value is stored, before listeners are notified.
    fn value_changed(&self, _host: &dyn ValueHost<T>, _new_value: T) {}

    fn is_automatable(&self) -> bool {
        true
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

/// Behaviours that accept values set by the plugin itself.
pub trait InternalSetter<T> {
    /// Called just before an internal value goes through the notifying path.
    fn prepare_internal_set(&self, value: T);
}

/// Behaviours that remember whether the last change came from the plugin.
pub trait OriginTracking {
    fn was_change_invoked_internally(&self) -> bool;
}

/// No hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl<T> ParameterBehaviour<T> for Plain {}

/// Tags each change with whether it was raised by the plugin.
#[derive(Debug, Default)]
pub struct InternalSet {
    pending: AtomicBool,
    latest_change_invoked_internally: AtomicBool,
}

impl<T> ParameterBehaviour<T> for InternalSet {
    fn value_changed(&self, _host: &dyn ValueHost<T>, _new_value: T) {
        let internal = self.pending.swap(false, Ordering::AcqRel);
        self.latest_change_invoked_internally.store(internal, Ordering::Release);
    }
}

impl<T> InternalSetter<T> for InternalSet {
    fn prepare_internal_set(&self, _value: T) {
        self.pending.store(true, Ordering::Release);
    }
}

impl OriginTracking for InternalSet {
    fn was_change_invoked_internally(&self) -> bool {
        self.latest_change_invoked_internally.load(Ordering::Acquire)
    }
}

/// Wraps another behaviour and keeps the parameter off automation lanes.
#[derive(Debug, Default)]
pub struct NonAutomatable<B>(pub B);

impl<T, B: ParameterBehaviour<T>> ParameterBehaviour<T> for NonAutomatable<B> {
    fn init(&mut self, default: T) {
        self.0.init(default);
    }

    fn value_changed(&self, host: &dyn ValueHost<T>, new_value: T) {
        self.0.value_changed(host, new_value);
    }

    fn is_automatable(&self) -> bool {
        false
    }

    fn is_read_only(&self) -> bool {
        self.0.is_read_only()
    }
}

impl<T, B: InternalSetter<T>> InternalSetter<T> for NonAutomatable<B> {
    fn prepare_internal_set(&self, value: T) {
        self.0.prepare_internal_set(value);
    }
}

impl<B: OriginTracking> OriginTracking for NonAutomatable<B> {
    fn was_change_invoked_internally(&self) -> bool {
        self.0.was_change_invoked_internally()
    }
}

/// Shadow state of a read-only parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnlyState {
    /// Holding the value the plugin last set.
    Stable(i32),
    /// Pushing the held value back after an external change.
    Resetting(i32),
}

impl ReadOnlyState {
    pub fn value(self) -> i32 {
        match self {
            ReadOnlyState::Stable(v) | ReadOnlyState::Resetting(v) => v,
        }
    }
}

/// Reverts every change that did not come from the plugin.
///
/// External writes still reach the stored value for an instant; the hook
/// then sets the held value again through the notifying path so the host
/// and the editor both snap back. The state lock is released before that
/// nested set, which re-enters this hook and finds `Resetting`.
#[derive(Debug)]
pub struct ReadOnly {
    state: Mutex<ReadOnlyState>,
}

impl Default for ReadOnly {
    fn default() -> Self {
        Self {
            state: Mutex::new(ReadOnlyState::Stable(0)),
        }
    }
}

impl ReadOnly {
    pub fn state(&self) -> ReadOnlyState {
        *self.state.lock()
    }
}

impl ParameterBehaviour<i32> for ReadOnly {
    fn init(&mut self, default: i32) {
        *self.state.get_mut() = ReadOnlyState::Stable(default);
    }

    fn value_changed(&self, host: &dyn ValueHost<i32>, new_value: i32) {
        let held = {
            let mut state = self.state.lock();
            match *state {
                ReadOnlyState::Resetting(_) => return,
                ReadOnlyState::Stable(v) if v == new_value => return,
                ReadOnlyState::Stable(v) => {
                    *state = ReadOnlyState::Resetting(v);
                    v
                }
            }
        };

        log::debug!("reverting external change {} -> {}", new_value, held);
        host.set_notifying_host(held);

        let mut state = self.state.lock();
        if *state == ReadOnlyState::Resetting(held) {
            *state = ReadOnlyState::Stable(held);
        }
    }

    fn is_automatable(&self) -> bool {
        false
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl InternalSetter<i32> for ReadOnly {
    fn prepare_internal_set(&self, value: i32) {
        *self.state.lock() = ReadOnlyState::Stable(value);
    }
}
