//! Server-rendered content fragments and their load requests.

use serde::{Deserialize, Serialize};

/// How a fragment endpoint is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMethod {
    /// Bodyless read (GET).
    Read,
    /// Write with a JSON body (POST).
    Write,
    /// Destructive write with a JSON body (DELETE).
    Destructive,
}

/// A fragment fetch: endpoint path relative to the server root, method and
/// optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Endpoint path, e.g. `collection-form`.
    pub path: String,
    /// Call style.
    pub method: FetchMethod,
    /// JSON body sent with write-style calls.
    pub body: Option<serde_json::Value>,
}

impl LoadRequest {
    /// Read when `body` is absent, write otherwise.
    #[must_use]
    pub fn new(path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        let method = if body.is_some() {
            FetchMethod::Write
        } else {
            FetchMethod::Read
        };
        Self {
            path: path.into(),
            method,
            body,
        }
    }

    /// Bodyless read.
    #[must_use]
    pub fn read(path: impl Into<String>) -> Self {
        Self::new(path, None)
    }

    /// Write with a body.
    #[must_use]
    pub fn write(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(path, Some(body))
    }

    /// Destructive write with a body.
    #[must_use]
    pub fn destructive(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            method: FetchMethod::Destructive,
            body: Some(body),
        }
    }
}

/// Monotonic token identifying one load attempt; completions carrying an
/// older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(pub(crate) u64);

/// Content state of a pane or of the collection list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FragmentState {
    /// Nothing requested yet.
    #[default]
    Unloaded,
    /// A fetch is in flight.
    Loading {
        /// Ticket of the in-flight attempt.
        ticket: LoadTicket,
    },
    /// Rendered content.
    Loaded {
        /// Opaque rendered markup.
        html: String,
    },
    /// The last fetch failed; a retry re-issues the stored request.
    Failed {
        /// Failure description.
        message: String,
    },
}

impl FragmentState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Whether the content is available.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Whether the last fetch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Rendered markup, if loaded.
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Loaded { html } => Some(html),
            _ => None,
        }
    }
}
