//! Collection run session state machine.
//!
//! States only move forward: `Idle -> Started -> Finished`. Results may
//! arrive before, between or after status messages; only the status messages
//! drive the state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::protocol::{
    ClientMessage, CollectionStatus, RequestResult, STATUS_FINISHED, STATUS_STARTED, ServerMessage,
};
use super::result::RequestResultEntry;

/// Identity of one run session; a pane hosts a new one per start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh, time-ordered session id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The server reported `finished`.
    Completed,
    /// The channel failed or the server reported an error first.
    Failed(String),
    /// The owning pane was closed.
    Cancelled,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// Channel opened, start command pending or sent.
    #[default]
    Idle,
    /// The server reported `started`.
    Started,
    /// Terminal; nothing is sent or received anymore.
    Finished(RunOutcome),
}

impl RunStatus {
    const fn rank(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Started => 1,
            Self::Finished(_) => 2,
        }
    }

    /// Whether the status is terminal.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Observable effect of applying a server message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Counters changed, state did not.
    Progressed,
    /// Moved to `Started`.
    Started,
    /// Moved to `Finished`; the channel must be closed.
    Finished,
    /// A result was appended at this index.
    ResultAppended(usize),
    /// The message arrived after `Finished` and was dropped.
    Ignored,
}

/// Percentage of `done` over `total`, rounded half up.
///
/// A run with no requests reports `0`; values above 100 are clamped.
#[must_use]
pub fn percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = done
        .saturating_mul(200)
        .saturating_add(total)
        / total.saturating_mul(2);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

/// Client-side state of one collection run.
#[derive(Debug, Clone)]
pub struct CollectionRunSession {
    id: SessionId,
    collection: String,
    status: RunStatus,
    status_text: String,
    done: u64,
    total: u64,
    results: Vec<RequestResultEntry>,
    opened_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl CollectionRunSession {
    /// Creates an idle session for `collection`.
    #[must_use]
    pub fn new(collection: impl Into<String>, opened_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            collection: collection.into(),
            status: RunStatus::Idle,
            status_text: String::new(),
            done: 0,
            total: 0,
            results: Vec::new(),
            opened_at,
            finished_at: None,
        }
    }

    /// Session identity.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Collection being run.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The single command sent once the channel is ready.
    #[must_use]
    pub fn start_command(&self) -> ClientMessage {
        ClientMessage::CollectionRun {
            collection: self.collection.clone(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Last status string reported by the server.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Whether the session has not finished yet.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.status.is_finished()
    }

    /// Whether the progress indicator should animate.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.status, RunStatus::Started)
    }

    /// Requests completed so far.
    #[must_use]
    pub const fn done(&self) -> u64 {
        self.done
    }

    /// Requests in the run.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Completion percentage.
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.done, self.total)
    }

    /// Results in arrival order.
    #[must_use]
    pub fn results(&self) -> &[RequestResultEntry] {
        &self.results
    }

    /// Time between opening and finishing, or until `now` while active.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> chrono::Duration {
        self.finished_at.unwrap_or(now) - self.opened_at
    }

    /// Applies one server message.
    pub fn apply(&mut self, message: ServerMessage, now: DateTime<Utc>) -> Transition {
        if self.status.is_finished() {
            return Transition::Ignored;
        }
        match message {
            ServerMessage::CollectionStatus(status) => self.apply_status(status, now),
            ServerMessage::RequestResult(RequestResult { request, result, .. }) => {
                self.results.push(RequestResultEntry::new(request, result));
                Transition::ResultAppended(self.results.len() - 1)
            }
            ServerMessage::Error { message } => {
                self.finish(RunOutcome::Failed(message), now);
                Transition::Finished
            }
        }
    }

    fn apply_status(&mut self, status: CollectionStatus, now: DateTime<Utc>) -> Transition {
        self.done = status.done;
        self.total = status.total;
        let transition = match status.status.as_str() {
            STATUS_FINISHED => {
                self.finish(RunOutcome::Completed, now);
                Transition::Finished
            }
            STATUS_STARTED if self.advance(RunStatus::Started) => Transition::Started,
            _ => Transition::Progressed,
        };
        self.status_text = status.status;
        transition
    }

    /// Ends the session because the channel failed. No-op once finished.
    pub fn fail(&mut self, reason: impl Into<String>, now: DateTime<Utc>) -> bool {
        self.finish(RunOutcome::Failed(reason.into()), now)
    }

    /// Ends the session because its pane went away. No-op once finished.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> bool {
        self.finish(RunOutcome::Cancelled, now)
    }

    fn finish(&mut self, outcome: RunOutcome, now: DateTime<Utc>) -> bool {
        let advanced = self.advance(RunStatus::Finished(outcome));
        if advanced {
            self.finished_at = Some(now);
        }
        advanced
    }

    fn advance(&mut self, next: RunStatus) -> bool {
        if next.rank() <= self.status.rank() {
            return false;
        }
        self.status = next;
        true
    }
}
