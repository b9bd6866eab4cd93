//! Frontend/backend connector for object plugins.
//!
//! [`ObjectsConnector`] is the only crossing point between the backend
//! object logic and the editor UI:
//!
//! - backend → UI: [`notify_parameter_changed`](ObjectsConnector::notify_parameter_changed)
//!   forwards a ([`ParameterId`], [`ParameterValue`]) pair to the one registered callback
//! - backend → UI: [`set_status_bar_text`](ObjectsConnector::set_status_bar_text)
//!   pushes a status string through the [`StatusBar`] hook
//!
//! # Threading
//!
//! Notifications arrive from the audio thread and the UI message thread
//! concurrently. The callback slot is an `ArcSwapOption`: notify loads a
//! snapshot without locking and invokes it outside any lock, so replacing
//! the callback never frees one that is still running. Concurrent notify
//! calls are not serialized; the callback must tolerate that.
//!
//! # Example
//!
//! ```
//! use earsuite_core::{ObjectsConnector, ParameterId, ParameterValue};
//! use std::sync::{Arc, Mutex};
//!
//! let status = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&status);
//! let connector = ObjectsConnector::new(move |text: &str| {
//!     *sink.lock().unwrap() = text.to_owned();
//! });
//!
//! connector.on_parameter_changed(|id, value| {
//!     assert_eq!(id, ParameterId::Gain);
//!     assert_eq!(value.as_float(), Some(0.5));
//! });
//! connector.notify_parameter_changed(ParameterId::Gain, ParameterValue::Float(0.5));
//!
//! connector.set_status_bar_text("Connected");
//! assert_eq!(*status.lock().unwrap(), "Connected");
//! ```

use crate::parameter::{ParameterId, ParameterValue};
use arc_swap::ArcSwapOption;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// UI-side hook receiving status bar text.
///
/// Implemented by the editor-facing side. Failures to update the UI are not
/// reported back.
pub trait StatusBar: Send + Sync {
    fn set_status_bar_text(&self, text: &str);
}

impl<F> StatusBar for F
where
    F: Fn(&str) + Send + Sync,
{
    fn set_status_bar_text(&self, text: &str) {
        self(text)
    }
}

type ParameterChangedFn = dyn Fn(ParameterId, ParameterValue) + Send + Sync;

// ArcSwap needs a sized pointee.
struct CallbackSlot {
    callback: Box<ParameterChangedFn>,
}

/// Bridges backend parameter changes and status text to the editor.
///
/// Not `Clone`: one connector belongs to one processor/editor pairing. Share
/// it behind an `Arc`.
pub struct ObjectsConnector {
    status_bar: Arc<dyn StatusBar>,
    callback: ArcSwapOption<CallbackSlot>,
}

impl ObjectsConnector {
    /// Create a connector that forwards status text to `status_bar`.
    pub fn new(status_bar: impl StatusBar + 'static) -> Self {
        Self::with_status_bar(Arc::new(status_bar))
    }

    /// Create a connector sharing an existing status bar hook.
    pub fn with_status_bar(status_bar: Arc<dyn StatusBar>) -> Self {
        Self {
            status_bar,
            callback: ArcSwapOption::empty(),
        }
    }

    /// Push text to the editor's status bar. Fire-and-forget.
    pub fn set_status_bar_text(&self, text: &str) {
        self.status_bar.set_status_bar_text(text);
    }

    /// Register the callback for parameter changes.
    ///
    /// Replaces any previously registered callback. The callback may be
    /// invoked from any thread, most likely the audio thread and the UI
    /// message thread, possibly at the same time.
    pub fn on_parameter_changed<F>(&self, callback: F)
    where
        F: Fn(ParameterId, ParameterValue) + Send + Sync + 'static,
    {
        let previous = self.callback.swap(Some(Arc::new(CallbackSlot {
            callback: Box::new(callback),
        })));
        log::debug!(
            "parameter callback {}",
            if previous.is_some() { "replaced" } else { "registered" }
        );
    }

    /// Remove the registered callback. Later notifications are no-ops.
    pub fn clear_parameter_callback(&self) {
        self.callback.store(None);
    }

    /// Whether a callback is currently registered.
    pub fn has_parameter_callback(&self) -> bool {
        self.callback.load().is_some()
    }

    /// Report a parameter change to the registered callback.
    ///
    /// Called by backend logic. The callback runs synchronously on the
    /// calling thread; without a registered callback this does nothing.
    ///
    /// Any value is delivered with any id; pairing is the backend's
    /// business. A panic inside the callback is caught and logged here so it
    /// never unwinds into host code.
    pub fn notify_parameter_changed(&self, id: ParameterId, value: ParameterValue) {
        // Own the snapshot: the callback may re-register while running.
        let Some(slot) = self.callback.load_full() else {
            return;
        };

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (slot.callback)(id, value)))
        {
            log::error!(
                "parameter callback panicked on {id}: {}",
                panic_message(payload.as_ref())
            );
        }
    }
}

impl fmt::Debug for ObjectsConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectsConnector")
            .field("has_parameter_callback", &self.has_parameter_callback())
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn connector() -> ObjectsConnector {
        ObjectsConnector::new(|_: &str| {})
    }

    #[test]
    fn test_notify_without_callback_is_noop() {
        let c = connector();
        assert!(!c.has_parameter_callback());
        c.notify_parameter_changed(ParameterId::Gain, ParameterValue::Float(1.0));
    }

    #[test]
    fn test_only_latest_callback_receives() {
        let c = connector();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let f = Arc::clone(&first);
        c.on_parameter_changed(move |_, _| {
            f.fetch_add(1, Ordering::SeqCst);
        });
        c.notify_parameter_changed(ParameterId::Azimuth, ParameterValue::Float(30.0));

        let s = Arc::clone(&second);
        c.on_parameter_changed(move |_, _| {
            s.fetch_add(1, Ordering::SeqCst);
        });
        c.notify_parameter_changed(ParameterId::Azimuth, ParameterValue::Float(-30.0));
        c.notify_parameter_changed(ParameterId::Elevation, ParameterValue::Float(10.0));

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_receives_id_and_value() {
        let c = connector();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        c.on_parameter_changed(move |id, value| sink.lock().push((id, value)));

        c.notify_parameter_changed(ParameterId::Name, "Dialogue".into());
        c.notify_parameter_changed(ParameterId::Routing, ParameterValue::Int(3));
        c.notify_parameter_changed(ParameterId::Range, ParameterValue::OptionalFloat(None));

        assert_eq!(
            *seen.lock(),
            vec![
                (ParameterId::Name, ParameterValue::Text("Dialogue".into())),
                (ParameterId::Routing, ParameterValue::Int(3)),
                (ParameterId::Range, ParameterValue::OptionalFloat(None)),
            ]
        );
    }

    #[test]
    fn test_any_value_kind_is_delivered() {
        let c = connector();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        c.on_parameter_changed(move |id, value| {
            log.lock().push((id, value));
        });

        c.notify_parameter_changed(ParameterId::Factor, ParameterValue::Float(0.5));
        c.notify_parameter_changed(ParameterId::Range, ParameterValue::Float(45.0));
        c.notify_parameter_changed(ParameterId::Routing, ParameterValue::UInt(3));

        assert_eq!(
            *seen.lock(),
            vec![
                (ParameterId::Factor, ParameterValue::Float(0.5)),
                (ParameterId::Range, ParameterValue::Float(45.0)),
                (ParameterId::Routing, ParameterValue::UInt(3)),
            ]
        );
    }

    #[test]
    fn test_cleared_callback_not_invoked() {
        let c = connector();
        let calls = Arc::new(AtomicUsize::new(0));
        let n = Arc::clone(&calls);
        c.on_parameter_changed(move |_, _| {
            n.fetch_add(1, Ordering::SeqCst);
        });
        c.clear_parameter_callback();
        c.notify_parameter_changed(ParameterId::Width, ParameterValue::Float(0.1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!c.has_parameter_callback());
    }

    #[test]
    fn test_panicking_callback_is_contained() {
        let c = connector();
        c.on_parameter_changed(|_, _| panic!("editor gone"));
        c.notify_parameter_changed(ParameterId::Depth, ParameterValue::Float(0.0));

        // Connector stays usable afterwards
        let calls = Arc::new(AtomicUsize::new(0));
        let n = Arc::clone(&calls);
        c.on_parameter_changed(move |_, _| {
            n.fetch_add(1, Ordering::SeqCst);
        });
        c.notify_parameter_changed(ParameterId::Depth, ParameterValue::Float(0.0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_reregister_while_running() {
        let c = Arc::new(connector());
        let inner_calls = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&c);
        let n = Arc::clone(&inner_calls);
        c.on_parameter_changed(move |_, _| {
            if let Some(c) = weak.upgrade() {
                let n = Arc::clone(&n);
                c.on_parameter_changed(move |_, _| {
                    n.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        c.notify_parameter_changed(ParameterId::Height, ParameterValue::Float(0.2));
        assert_eq!(inner_calls.load(Ordering::SeqCst), 0);
        c.notify_parameter_changed(ParameterId::Height, ParameterValue::Float(0.3));
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_notify_and_replace() {
        let c = Arc::new(connector());
        let total = Arc::new(AtomicUsize::new(0));

        let t = Arc::clone(&total);
        c.on_parameter_changed(move |_, _| {
            t.fetch_add(1, Ordering::Relaxed);
        });

        let notifiers: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&c);
                thread::spawn(move || {
                    for i in 0..1000 {
                        c.notify_parameter_changed(ParameterId::Gain, ParameterValue::Float(i as f32));
                    }
                })
            })
            .collect();

        let replacer = {
            let c = Arc::clone(&c);
            let total = Arc::clone(&total);
            thread::spawn(move || {
                for _ in 0..100 {
                    let t = Arc::clone(&total);
                    c.on_parameter_changed(move |_, _| {
                        t.fetch_add(1, Ordering::Relaxed);
                    });
                }
            })
        };

        for handle in notifiers {
            handle.join().unwrap();
        }
        replacer.join().unwrap();

        // Every notification lands in exactly one registered callback
        assert_eq!(total.load(Ordering::Relaxed), 4000);
    }

    #[test]
    fn test_status_bar_text_forwarded() {
        let texts = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&texts);
        let c = ObjectsConnector::new(move |text: &str| sink.lock().push(text.to_owned()));

        c.set_status_bar_text("Scanning");
        c.set_status_bar_text("Ready");
        assert_eq!(*texts.lock(), vec!["Scanning".to_owned(), "Ready".to_owned()]);
    }

    #[test]
    fn test_connector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectsConnector>();
    }
}
