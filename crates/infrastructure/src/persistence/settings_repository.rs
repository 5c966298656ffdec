//! Client settings persistence.
//!
//! Stores the settings in the platform-specific config directory:
//! - Linux: ~/.config/relay/settings.json
//! - macOS: ~/Library/Application Support/relay/settings.json
//! - Windows: %APPDATA%/relay/settings.json
//!
//! `RELAY_SERVER_URL` and `RELAY_FETCH_TIMEOUT_MS` override the file.

use std::path::{Path, PathBuf};

use relay_domain::ClientSettings;
use tokio::fs;
use tracing::debug;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Environment variable overriding `server_url`.
pub const SERVER_URL_ENV: &str = "RELAY_SERVER_URL";

/// Environment variable overriding `fetch_timeout_ms`.
pub const FETCH_TIMEOUT_ENV: &str = "RELAY_FETCH_TIMEOUT_MS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// An environment override does not parse.
    #[error("invalid value for {name}: {value:?}")]
    InvalidOverride {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Repository for the client settings file.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("relay").join("settings.json")),
        }
    }

    /// Repository backed by an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Path of the settings file, if a config directory exists.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the settings file and applies the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if an override does not parse.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        self.load_with(|name| std::env::var(name).ok()).await
    }

    /// Loads the settings file and applies overrides looked up through `env`.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if an override does not parse.
    pub async fn load_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientSettings, SettingsError> {
        let settings = match &self.path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading settings");
                let content = fs::read(path).await?;
                from_json_bytes(&content)?
            }
            _ => ClientSettings::default(),
        };
        apply_overrides(settings, env)
    }

    /// Saves the settings file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory or the file cannot
    /// be written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

fn apply_overrides(
    mut settings: ClientSettings,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    if let Some(url) = env(SERVER_URL_ENV).filter(|v| !v.trim().is_empty()) {
        settings.server_url = url;
    }
    if let Some(value) = env(FETCH_TIMEOUT_ENV) {
        settings.fetch_timeout_ms =
            value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidOverride {
                    name: FETCH_TIMEOUT_ENV,
                    value,
                })?;
    }
    Ok(settings)
}
