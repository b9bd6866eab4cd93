//! Integer host parameter.

use crate::behaviour::{InternalSetter, OriginTracking, ParameterBehaviour, Plain};
use crate::error::{ParameterError, Result};
use crate::host::{HostParameter, ValueHost};
use crate::info::ParameterInfo;
use crate::listener::{Listeners, ParameterListener};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

type StringFromInt = Box<dyn Fn(i32, usize) -> String + Send + Sync>;
type IntFromString = Box<dyn Fn(&str) -> Option<i32> + Send + Sync>;

/// Integer parameter with a stepped 0-1 mapping over `min..=max`.
///
/// The stored value is always inside the range. `B` decides what happens
/// after each change; see [`crate::behaviour`].
pub struct IntParameter<B = Plain> {
    info: ParameterInfo,
    value: AtomicI32,
    min: i32,
    max: i32,
    default: i32,
    behaviour: B,
    listeners: Listeners,
    string_from_int: StringFromInt,
    int_from_string: IntFromString,
}

impl<B: ParameterBehaviour<i32> + Default> IntParameter<B> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        range: RangeInclusive<i32>,
        default: i32,
    ) -> Result<Self> {
        Self::with_behaviour(id, name, range, default, B::default())
    }
}

impl<B: ParameterBehaviour<i32>> IntParameter<B> {
    pub fn with_behaviour(
        id: impl Into<String>,
        name: impl Into<String>,
        range: RangeInclusive<i32>,
        default: i32,
        mut behaviour: B,
    ) -> Result<Self> {
        let (min, max) = range.into_inner();
        if min >= max {
            return Err(ParameterError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(ParameterError::DefaultOutOfRange { default, min, max });
        }

        behaviour.init(default);

        let mut info = ParameterInfo::new(id, name);
        info.min_value = min as f64;
        info.max_value = max as f64;
        info.default_value = default as f64;
        info.step_count = max.abs_diff(min);
        info.flags.automatable = behaviour.is_automatable();
        info.flags.read_only = behaviour.is_read_only();

        Ok(Self {
            info,
            value: AtomicI32::new(default),
            min,
            max,
            default,
            behaviour,
            listeners: Listeners::default(),
            string_from_int: Box::new(|v, _| v.to_string()),
            int_from_string: Box::new(|s| s.trim().parse().ok()),
        })
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
    pub fn with_string_from_int(
        mut self,
        f: impl Fn(i32, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.string_from_int = Box::new(f);
        self
    }

    pub fn with_int_from_string(
        mut self,
        f: impl Fn(&str) -> Option<i32> + Send + Sync + 'static,
    ) -> Self {
        self.int_from_string = Box::new(f);
        self
    }

    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Acquire)
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    pub fn behaviour(&self) -> &B {
        &self.behaviour
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn convert_to_0_to_1(&self, value: i32) -> f32 {
        let span = (self.max as f64) - (self.min as f64);
        let clamped = value.clamp(self.min, self.max) as f64;
        ((clamped - self.min as f64) / span) as f32
    }

    pub fn convert_from_0_to_1(&self, normalized: f32) -> i32 {
        let span = (self.max as f64) - (self.min as f64);
        let plain = self.min as f64 + (normalized.clamp(0.0, 1.0) as f64) * span;
        (plain.round() as i32).clamp(self.min, self.max)
    }

    fn store_and_hook(&self, normalized: f32) -> i32 {
        let plain = self.convert_from_0_to_1(normalized);
        self.value.store(plain, Ordering::Release);
        self.behaviour.value_changed(self, plain);
        plain
    }
}

impl<B: ParameterBehaviour<i32> + InternalSetter<i32>> IntParameter<B> {
    /// Set a value from inside the plugin and tell the host about it.
    ///
    /// Out-of-range values are clamped.
    pub fn internal_set_int_and_notify_host(&self, value: i32) {
        let value = value.clamp(self.min, self.max);
        self.behaviour.prepare_internal_set(value);
        self.set_value_notifying_host(self.convert_to_0_to_1(value));
    }
}

impl<B: ParameterBehaviour<i32> + OriginTracking> IntParameter<B> {
    /// Whether the most recent change came through
    /// [`internal_set_int_and_notify_host`](Self::internal_set_int_and_notify_host).
    pub fn was_change_invoked_internally(&self) -> bool {
        self.behaviour.was_change_invoked_internally()
    }
}

impl<B: ParameterBehaviour<i32>> ValueHost<i32> for IntParameter<B> {
    fn current(&self) -> i32 {
        self.get()
    }

    fn set_notifying_host(&self, value: i32) {
        self.set_value_notifying_host(self.convert_to_0_to_1(value));
    }
}

impl<B: ParameterBehaviour<i32>> HostParameter for IntParameter<B> {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn value(&self) -> f32 {
        self.convert_to_0_to_1(self.get())
    }

    fn default_value(&self) -> f32 {
        self.convert_to_0_to_1(self.default)
    }

    fn set_value(&self, normalized: f32) {
        self.store_and_hook(normalized);
    }

    fn set_value_notifying_host(&self, normalized: f32) {
        let plain = self.store_and_hook(normalized);
        // The hook may already have pushed a different value out
        if self.get() == plain {
            self.listeners
                .value_changed(self.info.index, self.convert_to_0_to_1(plain));
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
        let text = (self.string_from_int)(self.convert_from_0_to_1(normalized), maximum_length);
        truncate(text, maximum_length)
    }

    fn value_for_text(&self, text: &str) -> Option<f32> {
        (self.int_from_string)(text).map(|v| self.convert_to_0_to_1(v))
    }
}

impl<B> fmt::Debug for IntParameter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntParameter")
            .field("id", &self.info.id)
            .field("value", &self.value.load(Ordering::Relaxed))
            .field("range", &(self.min..=self.max))
            .finish_non_exhaustive()
    }
}

pub(crate) fn truncate(mut text: String, maximum_length: usize) -> String {
    if maximum_length > 0 {
        if let Some((idx, _)) = text.char_indices().nth(maximum_length) {
            text.truncate(idx);
        }
    }
    text
}
