//! Collection runs: wire protocol, captured results, and the session state
//! machine that reconciles streamed events into progress and a result list.

mod protocol;
mod result;
mod session;

pub use protocol::{
    ClientMessage, CollectionStatus, RequestResult, STATUS_FINISHED, STATUS_STARTED, ServerMessage,
};
pub use result::{RequestResultEntry, RequestResultSnapshot, ResultOutcome, ResultView};
pub use session::{CollectionRunSession, RunOutcome, RunStatus, SessionId, Transition, percent};
