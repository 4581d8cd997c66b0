// Client configuration
// Read from config.toml in the platform config directory; every field has
// a default so a missing or partial file still yields a working setup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the task backend.
    pub backend_url: String,
    /// "light", "dark" or "system".
    pub theme: String,
    /// Timeout applied to every backend request.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            theme: "system".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = Self::resolve_path();
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Failed to load config from {}: {:#}, using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Backend base URL without a trailing slash.
    pub fn backend_base(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    fn resolve_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from("week-planner.toml")
        }

        #[cfg(not(debug_assertions))]
        {
            if let Some(proj_dirs) = directories::ProjectDirs::from("com", "WeekPlanner", "WeekPlanner")
            {
                proj_dirs.config_dir().join("config.toml")
            } else {
                PathBuf::from("week-planner.toml")
            }
        }
    }
}
