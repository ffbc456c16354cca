use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from optodo.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays up, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub toggle_wording: ToggleWording,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_duration_ms(),
            toggle_wording: ToggleWording::default(),
        }
    }
}

fn default_duration_ms() -> u64 {
    3000
}

/// Which completion state picks the toggle message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleWording {
    /// Describe the state the task ends up in
    #[default]
    Resulting,
    /// Describe the state the task was in before the toggle, so completing
    /// a task says it was logged and reopening one says it was completed
    PreToggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Start with the three example tasks
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig { seed: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
