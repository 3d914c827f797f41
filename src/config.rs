//! Configuration handling for the contact form

use crate::lifecycle::{LifecycleSettings, SUCCESS_MESSAGE_TTL};
use crate::messages::{Locale, Messages};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated submission delay in milliseconds
const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1500;

/// Name of the log file inside the data directory
const LOG_FILE_NAME: &str = "contact-form.log";

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Language of labels and messages
    pub locale: Option<Locale>,
    /// Delay of the simulated submission
    pub submission_delay_ms: Option<u64>,
    /// How long the success banner stays visible
    pub success_message_ttl_ms: Option<u64>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("no", "nylund", "contact-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from the user's config directory
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, logging and falling back to the
    /// defaults when the file cannot be used
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            Self::default()
        })
    }

    /// Load configuration from `path`. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(
            self.submission_delay_ms
                .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS),
        )
    }

    pub fn success_message_ttl(&self) -> Duration {
        self.success_message_ttl_ms
            .map(Duration::from_millis)
            .unwrap_or(SUCCESS_MESSAGE_TTL)
    }

    /// Lifecycle tunables derived from this configuration
    pub fn lifecycle_settings(&self) -> LifecycleSettings {
        LifecycleSettings {
            messages: Messages::for_locale(self.locale()),
            success_message_ttl: self.success_message_ttl(),
        }
    }
}
