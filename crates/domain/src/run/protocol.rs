//! Push-channel messages of the collection run protocol.
//!
//! Every frame is a JSON object `{"type": ..., "data": {...}}`.

use serde::{Deserialize, Serialize};

use super::result::RequestResultSnapshot;

/// Status string announcing the start of a run.
pub const STATUS_STARTED: &str = "started";

/// Status string announcing the end of a run.
pub const STATUS_FINISHED: &str = "finished";

/// Client to server message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Start running every request of a collection.
    CollectionRun {
        /// Collection path.
        collection: String,
    },
}

/// Server to client message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Progress of the run.
    CollectionStatus(CollectionStatus),
    /// Result of one request.
    RequestResult(RequestResult),
    /// The server rejected the command.
    Error {
        /// Server supplied description.
        message: String,
    },
}

impl ServerMessage {
    /// Whether no further message belongs to the run after this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::CollectionStatus(status) => status.status == STATUS_FINISHED,
            Self::Error { .. } => true,
            Self::RequestResult(_) => false,
        }
    }
}

/// Payload of a `collection-status` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStatus {
    /// `started`, `finished`, or an intermediate status such as `in-progress`.
    pub status: String,
    /// Requests completed so far.
    pub done: u64,
    /// Requests in the run.
    pub total: u64,
    /// Collection the status refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

/// Payload of a `request-result` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResult {
    /// Request name.
    pub request: String,
    /// Captured exchange.
    pub result: RequestResultSnapshot,
    /// Collection the request belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}
