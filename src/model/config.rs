use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from binder.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinderConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides by theme slot name (hex strings like "#0C001B").
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

fn default_true() -> bool {
    true
}
