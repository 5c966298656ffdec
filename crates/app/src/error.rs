//! Front end errors

use relay_application::ApplicationError;
use relay_infrastructure::{AdapterError, SerializationError, SettingsError};
use thiserror::Error;

/// Anything that stops a command before it produced its output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// An adapter could not be built from the settings.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The workbench rejected a command.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Settings could not be rendered.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The server did not deliver what the command needs.
    #[error("{0}")]
    Server(String),

    /// Writing the output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
