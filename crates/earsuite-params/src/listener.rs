//! Parameter listeners.

use parking_lot::RwLock;
use std::sync::Arc;

/// Receives value and gesture notifications from a parameter.
///
/// The host wrapper and the editor are both listeners. Notifications arrive
/// on whichever thread changed the parameter.
pub trait ParameterListener: Send + Sync {
    /// The parameter's value changed; `new_value` is normalized (0.0-1.0).
    fn parameter_value_changed(&self, parameter_index: usize, new_value: f32);

    /// A continuous user edit started or ended.
    fn parameter_gesture_changed(&self, parameter_index: usize, gesture_is_starting: bool);
}

/// Listener that runs a closure on every value change and ignores gestures.
///
/// # Example
///
/// ```
/// use earsuite_params::{AudioParameterInt, HostParameter, ParamChangeCallback};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let changes = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&changes);
///
/// let routing = AudioParameterInt::new("routing", "Routing", 0..=63, 0)?;
/// routing.add_listener(ParamChangeCallback::shared(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// routing.begin_change_gesture();
/// routing.set_value_notifying_host(0.5);
/// routing.end_change_gesture();
/// assert_eq!(changes.load(Ordering::SeqCst), 1);
/// # Ok::<(), earsuite_params::ParameterError>(())
/// ```
pub struct ParamChangeCallback {
    callback: Box<dyn Fn() + Send + Sync>,
}

impl ParamChangeCallback {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Build the callback ready to hand to `add_listener`.
    pub fn shared(callback: impl Fn() + Send + Sync + 'static) -> Arc<dyn ParameterListener> {
        Arc::new(Self::new(callback))
    }
}

impl ParameterListener for ParamChangeCallback {
    fn parameter_value_changed(&self, _parameter_index: usize, _new_value: f32) {
        (self.callback)();
    }

    fn parameter_gesture_changed(&self, _parameter_index: usize, _gesture_is_starting: bool) {}
}

/// Listener list shared by all parameter types.
///
/// Broadcasts iterate a snapshot taken outside the lock, so a listener may
/// change the parameter (and so re-enter the broadcast) or add and remove
/// listeners while being notified.
#[derive(Default)]
pub(crate) struct Listeners {
    list: RwLock<Vec<Arc<dyn ParameterListener>>>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: Arc<dyn ParameterListener>) {
        let mut list = self.list.write();
        if !list.iter().any(|l| same_listener(l, &listener)) {
            list.push(listener);
        }
    }

    pub(crate) fn remove(&self, listener: &Arc<dyn ParameterListener>) {
        self.list.write().retain(|l| !same_listener(l, listener));
    }

    pub(crate) fn len(&self) -> usize {
        self.list.read().len()
    }

    pub(crate) fn value_changed(&self, index: usize, new_value: f32) {
        for listener in self.snapshot() {
            listener.parameter_value_changed(index, new_value);
        }
    }

    pub(crate) fn gesture_changed(&self, index: usize, starting: bool) {
        for listener in self.snapshot() {
            listener.parameter_gesture_changed(index, starting);
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn ParameterListener>> {
        self.list.read().clone()
    }
}

fn same_listener(a: &Arc<dyn ParameterListener>, b: &Arc<dyn ParameterListener>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
