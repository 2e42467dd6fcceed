//! A generic, construction-validated finite-state workflow engine.
//!
//! The engine is a partial function from `(state, command)` to the next
//! state, built once from a list of [`Transition`] edges and queried many
//! times. Construction rejects ambiguous tables; queries surface missing
//! edges as recoverable [`Outcome`](crate::Outcome) failures.

pub mod builder;
pub mod engine;
pub mod error;
pub mod state;
pub mod transition;

pub use builder::WorkflowBuilder;
pub use engine::WorkflowEngine;
pub use error::BuildError;
pub use state::{Command, State};
pub use transition::Transition;
