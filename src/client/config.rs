use serde::{Deserialize, Serialize};

/// Host-level settings shared by every panel component.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PanelConfig {
    /// Prefix prepended to every generated URL, e.g. `/admin`
    #[serde(default)]
    pub base_path: String,
}

impl PanelConfig {
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}
