//! Parameter metadata reported to the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFlags {
    pub automatable: bool,
    pub read_only: bool,
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self {
            automatable: true,
            read_only: false,
        }
    }
}

/// Parameter metadata.
///
/// `id` is the stable string identifier the host stores automation and
/// state under; `index` is the parameter's position in the plugin's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub id: String,
    pub name: String,
    pub label: String,
    pub index: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub default_value: f64,
    pub step_count: u32,
    pub flags: ParameterFlags,
}

impl ParameterInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label: String::new(),
            index: 0,
            min_value: 0.0,
            max_value: 1.0,
            default_value: 0.0,
            step_count: 0,
            flags: ParameterFlags::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Hide the parameter from automation lanes.
    pub fn non_automatable(mut self) -> Self {
        self.flags.automatable = false;
        self
    }

    /// Mark the parameter as display-only.
    pub fn read_only(mut self) -> Self {
        self.flags.read_only = true;
        self.flags.automatable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let info = ParameterInfo::new("gain", "Gain");
        assert_eq!(info.id, "gain");
        assert_eq!(info.name, "Gain");
        assert!(info.label.is_empty());
        assert!(info.flags.automatable);
        assert!(!info.flags.read_only);
        assert_eq!(
            info.flags,
            ParameterFlags {
                automatable: true,
                read_only: false,
            }
        );
    }

    #[test]
    fn test_read_only_is_never_automatable() {
        let info = ParameterInfo::new("meter", "Meter")
            .with_label("dB")
            .with_index(3)
            .read_only();
        assert_eq!(info.label, "dB");
        assert_eq!(info.index, 3);
        assert!(info.flags.read_only);
        assert!(!info.flags.automatable);
    }
}
