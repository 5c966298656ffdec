//! Relay Domain - Core workbench types
//!
//! This crate defines the state model of the Relay workbench client: the
//! identifier codec, the tab/pane registry, editable forms and the collection
//! run session. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod form;
pub mod fragment;
pub mod id;
pub mod run;
pub mod settings;
pub mod workspace;

pub use error::{DomainError, DomainResult};
pub use form::{
    CollectionForm, CollectionFormEdit, FormRow, NewRowInput, RequestForm, RequestFormEdit,
    RowEdit, RowGroup, RowRef, SaveCollectionBody, SaveRequestBody,
};
pub use fragment::{FetchMethod, FragmentState, LoadRequest, LoadTicket};
pub use id::{Identifier, collection_id, display_name, request_id, run_suffix, sanitize};
pub use run::{
    ClientMessage, CollectionRunSession, RequestResultEntry, RequestResultSnapshot, ResultOutcome,
    ResultView, RunOutcome, RunStatus, ServerMessage, SessionId, Transition,
};
pub use settings::ClientSettings;
pub use workspace::{
    Assignment, CollectionsNav, Created, DocumentKey, OnLoad, Opened, Pane, PaneRef, PaneView,
    Retargeted, RunView, Tab, Workspace,
};
