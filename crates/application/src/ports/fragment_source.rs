//! Fragment source port
//!
//! Defines how the client obtains server-rendered fragments.

use async_trait::async_trait;
use relay_domain::LoadRequest;

/// Errors that can occur while fetching a fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The endpoint path could not be joined onto the server URL.
    #[error("invalid URL for {path}: {message}")]
    InvalidUrl {
        /// Endpoint path.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status {
        /// Endpoint path.
        path: String,
        /// Response status code.
        status: u16,
    },

    /// The fetch did not complete within the configured timeout.
    #[error("{path} timed out after {timeout_ms} ms")]
    Timeout {
        /// Endpoint path.
        path: String,
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// Connection or protocol failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The owning pane went away before the fetch completed.
    #[error("fetch cancelled")]
    Cancelled,
}

/// Port for fetching rendered fragments.
///
/// Implementations resolve `request.path` against the server root, use a
/// bodyless read, a JSON write or a JSON delete depending on
/// `request.method`, and return the response body verbatim.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetches one fragment.
    ///
    /// # Errors
    /// Returns a [`FetchError`] on transport failures, timeouts and
    /// non-success statuses.
    async fn fetch(&self, request: &LoadRequest) -> Result<String, FetchError>;
}
