//! Dashboard settings, stored as TOML in the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rsv_fetch::{DEFAULT_USER_AGENT, SourceConfig};
use rsv_persistence::io::write_atomic;
use rsv_persistence::{DEFAULT_MAX_RECENT, PersistenceError, RECENT_SEARCHES_FILE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::{LogConfig, LogFormat};

/// Settings file failures.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: PersistenceError,
    },
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

/// Remote reservation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Endpoint returning the JSON reservation list. Empty means unset.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of recent search terms to remember.
    pub max_recent: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_recent: DEFAULT_MAX_RECENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// error, warn, info, debug or trace.
    pub level: String,
    pub format: LogFormat,
    /// Allow customer data in log output.
    pub log_data: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            log_data: false,
        }
    }
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    ///
    /// Uses atomic write (temp file + rename), creating the parent directory
    /// if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_atomic(path, content.as_bytes()).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Default location of the recent-search store.
    pub fn recent_searches_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.data_dir().join(RECENT_SEARCHES_FILE))
            .unwrap_or_else(|| PathBuf::from(RECENT_SEARCHES_FILE))
    }

    /// Configured endpoint, `None` when unset.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        Some(self.source.endpoint.trim()).filter(|endpoint| !endpoint.is_empty())
    }

    /// HTTP client settings for the record source.
    #[must_use]
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            timeout: Duration::from_secs(self.source.timeout_secs),
            user_agent: self.source.user_agent.clone(),
        }
    }

    /// Logging configuration from the `[logging]` section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level_name(&self.logging.level)
            .with_format(self.logging.format)
            .with_log_data(self.logging.log_data)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "ReservationDashboard", "rsv-dashboard")
}
