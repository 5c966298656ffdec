//! Client Settings Domain Model
//!
//! Defines where the workbench server lives and how long the client waits
//! for it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings of the workbench client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL every fragment path is resolved against.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Path of the push channel endpoint, relative to `server_url`.
    #[serde(default = "default_channel_path")]
    pub channel_path: String,

    /// Timeout of a single fragment fetch, in milliseconds.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Timeout of the push channel handshake, in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_server_url() -> String {
    "http://127.0.0.1:8041/".to_owned()
}

fn default_channel_path() -> String {
    "ws".to_owned()
}

const fn default_fetch_timeout_ms() -> u64 {
    30_000
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}

impl ClientSettings {
    /// Fragment fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Channel handshake timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            channel_path: default_channel_path(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
