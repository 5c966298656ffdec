//! Relay Application - Workbench orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits for the fragment server and the push channel
//! - Readers that seed form models from the server-rendered editors
//! - The fragment loader and the collection run driver
//! - The workbench controller that owns the tab/pane state

pub mod documents;
pub mod endpoints;
pub mod error;
pub mod form_reader;
pub mod fragment_loader;
pub mod inspector;
pub mod ports;
pub mod run_session;
pub mod workbench;

pub use documents::TabPlan;
pub use error::{ApplicationError, ApplicationResult};
pub use fragment_loader::FragmentLoader;
pub use ports::{ChannelConnector, ChannelError, Clock, FetchError, FragmentSource, PushChannel};
pub use run_session::{RunEnd, RunSessionDriver};
pub use workbench::{Workbench, WorkbenchCommand, WorkbenchUpdate};
