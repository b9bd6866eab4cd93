//! Boolean host parameter.

use crate::behaviour::{ParameterBehaviour, Plain};
use crate::host::{HostParameter, ValueHost};
use crate::info::ParameterInfo;
use crate::int_param::truncate;
use crate::listener::{Listeners, ParameterListener};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type StringFromBool = Box<dyn Fn(bool, usize) -> String + Send + Sync>;
type BoolFromString = Box<dyn Fn(&str) -> Option<bool> + Send + Sync>;

/// Two-state parameter. Normalized values at or above 0.5 read as `true`.
pub struct BoolParameter<B = Plain> {
    info: ParameterInfo,
    value: AtomicBool,
    default: bool,
    behaviour: B,
    listeners: Listeners,
    string_from_bool: StringFromBool,
    bool_from_string: BoolFromString,
}

impl<B: ParameterBehaviour<bool> + Default> BoolParameter<B> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, default: bool) -> Self {
        Self::with_behaviour(id, name, default, B::default())
    }
}

impl<B: ParameterBehaviour<bool>> BoolParameter<B> {
    pub fn with_behaviour(
        id: impl Into<String>,
        name: impl Into<String>,
        default: bool,
        mut behaviour: B,
    ) -> Self {
        behaviour.init(default);

        let mut info = ParameterInfo::new(id, name);
        info.default_value = if default { 1.0 } else { 0.0 };
        info.step_count = 1;
        info.flags.automatable = behaviour.is_automatable();
        info.flags.read_only = behaviour.is_read_only();

        Self {
            info,
            value: AtomicBool::new(default),
            default,
            behaviour,
            listeners: Listeners::default(),
            string_from_bool: Box::new(|on, _| if on { "On" } else { "Off" }.to_string()),
            bool_from_string: Box::new(default_bool_from_string),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.info.label = label.into();
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.info.index = index;
        self
    }

    /// Custom display text. The closure receives the value and the
    /// maximum text length the host can show (0 for unlimited).
    pub fn with_string_from_bool(
        mut self,
        f: impl Fn(bool, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.string_from_bool = Box::new(f);
        self
    }

    pub fn with_bool_from_string(
        mut self,
        f: impl Fn(&str) -> Option<bool> + Send + Sync + 'static,
    ) -> Self {
        self.bool_from_string = Box::new(f);
        self
    }

    pub fn get(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    pub fn behaviour(&self) -> &B {
        &self.behaviour
    }

    fn store_and_hook(&self, normalized: f32) -> bool {
        let on = normalized >= 0.5;
        self.value.store(on, Ordering::Release);
        self.behaviour.value_changed(self, on);
        on
    }
}

fn default_bool_from_string(text: &str) -> Option<bool> {
    let text = text.trim();
    match text.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Some(true),
        "off" | "no" | "false" => Some(false),
        _ => text.parse::<f32>().ok().map(|v| v != 0.0),
    }
}

fn to_normalized(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

impl<B: ParameterBehaviour<bool>> ValueHost<bool> for BoolParameter<B> {
    fn current(&self) -> bool {
        self.get()
    }

    fn set_notifying_host(&self, value: bool) {
        self.set_value_notifying_host(to_normalized(value));
    }
}

impl<B: ParameterBehaviour<bool>> HostParameter for BoolParameter<B> {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn value(&self) -> f32 {
        to_normalized(self.get())
    }

    fn default_value(&self) -> f32 {
        to_normalized(self.default)
    }

    fn set_value(&self, normalized: f32) {
        self.store_and_hook(normalized);
    }

    fn set_value_notifying_host(&self, normalized: f32) {
        let on = self.store_and_hook(normalized);
        if self.get() == on {
            self.listeners.value_changed(self.info.index, to_normalized(on));
        }
    }

    fn begin_change_gesture(&self) {
        self.listeners.gesture_changed(self.info.index, true);
    }

    fn end_change_gesture(&self) {
        self.listeners.gesture_changed(self.info.index, false);
    }

    fn is_automatable(&self) -> bool {
        self.behaviour.is_automatable()
    }

    fn add_listener(&self, listener: Arc<dyn ParameterListener>) {
        self.listeners.add(listener);
    }

    fn remove_listener(&self, listener: &Arc<dyn ParameterListener>) {
        self.listeners.remove(listener);
    }

    fn text_for_value(&self, normalized: f32, maximum_length: usize) -> String {
        let text = (self.string_from_bool)(normalized >= 0.5, maximum_length);
        truncate(text, maximum_length)
    }

    fn value_for_text(&self, text: &str) -> Option<f32> {
        (self.bool_from_string)(text).map(to_normalized)
    }
}

impl<B> fmt::Debug for BoolParameter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolParameter")
            .field("id", &self.info.id)
            .field("value", &self.value.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
