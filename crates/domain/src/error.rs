//! Domain error types

use thiserror::Error;

use crate::workspace::PaneRef;

/// Domain-level errors raised by the workspace state machine and the forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required form field is missing; the save is blocked.
    #[error("validation failed: {form} requires a {field}")]
    ValidationFailure {
        /// Form that failed validation.
        form: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Two distinct documents sanitize to the same identifier.
    #[error("identifier collision: {identifier} is already used by {existing}, opened as {assigned}")]
    IdentifierCollision {
        /// The identifier both documents sanitize to.
        identifier: String,
        /// Description of the document already holding it.
        existing: String,
        /// The disambiguated identifier assigned to the new document.
        assigned: String,
    },

    /// No open tab carries the identifier.
    #[error("tab not found: {0}")]
    TabNotFound(String),

    /// The pane reference does not belong to an open tab.
    #[error("pane not found: {0}")]
    PaneNotFound(PaneRef),

    /// The operation does not apply to the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
