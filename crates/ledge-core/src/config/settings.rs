use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Widget settings, loaded from `settings.json` in the config directory.
///
/// Every field has a serde default so a partial file still loads; a
/// missing or corrupt file falls back to defaults entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Override for the host socket path; `None` uses the runtime-dir
    /// default.
    #[serde(default)]
    pub socket_path: Option<PathBuf>,

    /// Per-request delivery timeout for bridge calls, in milliseconds.
    /// Issued commands are never cancelled; this only bounds how long a
    /// caller waits for the reply.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Theme passed back in context-menu descriptors.
    #[serde(default = "default_menu_theme")]
    pub menu_theme: String,
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_menu_theme() -> String {
    "dark".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            socket_path: None,
            request_timeout_ms: default_request_timeout_ms(),
            menu_theme: default_menu_theme(),
        }
    }
}

impl Settings {
    /// Load settings, strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load settings, falling back to defaults on a missing or corrupt
    /// file.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to load {}, using defaults: {e}", path.display());
                Self::default()
            }
        }
    }
}
