//! UI Settings Model
//!
//! Presentation-only blob stored verbatim for the front end; none of the
//! fields influence any computation.

use serde::{Deserialize, Serialize};

/// UI preferences blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub theme: String,
    #[serde(default)]
    pub compact_mode: bool,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            compact_mode: false,
            notifications_enabled: true,
        }
    }
}
