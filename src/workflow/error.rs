//! Build errors for workflow engine construction.

use thiserror::Error;

/// Errors that can occur when building a workflow engine.
///
/// These are configuration mistakes, detected once at construction; they
/// never surface at query time and should never reach an end user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Duplicate transition for command '{command}' from state '{from}'")]
    DuplicateTransition { from: String, command: String },
}
