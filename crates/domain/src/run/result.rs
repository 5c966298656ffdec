//! Captured request/response records of a run.

use serde::{Deserialize, Serialize};

/// Self-contained record of one request/response pair.
///
/// Everything the result inspector shows comes from here; nothing is
/// re-queried from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResultSnapshot {
    /// Method actually sent.
    pub request_method: String,
    /// URL after variable resolution.
    pub request_url: String,
    /// Sent headers, one `name: value` per line.
    pub request_headers: String,
    /// Sent payload, if any.
    #[serde(default)]
    pub request_payload: Option<String>,
    /// Response status code.
    pub response_status: u16,
    /// Received headers, one `name: value` per line.
    pub response_headers: String,
    /// Received payload, if any.
    #[serde(default)]
    pub response_payload: Option<String>,
}

impl RequestResultSnapshot {
    /// Classifies the response: anything below 400 is a success.
    #[must_use]
    pub const fn outcome(&self) -> ResultOutcome {
        if self.response_status < 400 {
            ResultOutcome::Success
        } else {
            ResultOutcome::Failure
        }
    }
}

/// Success/failure classification of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOutcome {
    /// Status below 400.
    Success,
    /// Status 400 or above.
    Failure,
}

/// One entry of a run's result list. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestResultEntry {
    request_name: String,
    outcome: ResultOutcome,
    snapshot: RequestResultSnapshot,
}

impl RequestResultEntry {
    /// Builds an entry, deriving the outcome from the snapshot.
    #[must_use]
    pub fn new(request_name: impl Into<String>, snapshot: RequestResultSnapshot) -> Self {
        Self {
            request_name: request_name.into(),
            outcome: snapshot.outcome(),
            snapshot,
        }
    }

    /// Name of the executed request.
    #[must_use]
    pub fn request_name(&self) -> &str {
        &self.request_name
    }

    /// Outcome of the request.
    #[must_use]
    pub const fn outcome(&self) -> ResultOutcome {
        self.outcome
    }

    /// The captured snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &RequestResultSnapshot {
        &self.snapshot
    }
}

/// Read-only detail view populated from a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    /// Request method field.
    pub request_method: String,
    /// Request URL field.
    pub request_url: String,
    /// Request headers field.
    pub request_headers: String,
    /// Request payload field.
    pub request_payload: String,
    /// Status the display template was chosen for.
    pub response_status: u16,
    /// Response headers field.
    pub response_headers: String,
    /// Response payload field.
    pub response_payload: String,
}

impl From<&RequestResultSnapshot> for ResultView {
    fn from(snapshot: &RequestResultSnapshot) -> Self {
        Self {
            request_method: snapshot.request_method.clone(),
            request_url: snapshot.request_url.clone(),
            request_headers: snapshot.request_headers.clone(),
            request_payload: snapshot.request_payload.clone().unwrap_or_default(),
            response_status: snapshot.response_status,
            response_headers: snapshot.response_headers.clone(),
            response_payload: snapshot.response_payload.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
pub(crate) fn snapshot_with_status(status: u16) -> RequestResultSnapshot {
    RequestResultSnapshot {
        request_method: "GET".to_owned(),
        request_url: "http://localhost/".to_owned(),
        request_headers: "accept: */*".to_owned(),
        request_payload: None,
        response_status: status,
        response_headers: "content-type: text/plain".to_owned(),
        response_payload: Some("ok".to_owned()),
    }
}
