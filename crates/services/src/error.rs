//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;

/// Errors emitted by `QuizController`.
///
/// Every variant describes a rejected intent; the controller state is left
/// untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControllerError {
    #[error("no quiz has been started")]
    NotStarted,
    #[error("a quiz is already in progress")]
    SessionActive,
    #[error("no category is available")]
    NoCategory,
    #[error(transparent)]
    Session(#[from] SessionError),
}
