//! Railyard: railway-oriented building blocks for layered applications.
//!
//! The crate has three parts sharing one contract, the [`Outcome`] type:
//!
//! - **Outcomes**: an immutable success/failure container carrying zero or
//!   more [`Failure`]s, with combinators for chaining ([`Outcome::and_then`],
//!   [`Outcome::map`]), aggregating ([`combine`]), and tapping side effects
//!   ([`Outcome::tap_success`], [`Outcome::tap_failure`]).
//! - **Pipeline**: a [`Pipeline`] decorator composing request validators, an
//!   asynchronous [`Handler`], and [`PostProcessor`]s with precise ordering:
//!   all validators run and their failures aggregate; the handler only runs
//!   on valid input; post-processors observe every result.
//! - **Workflow**: a [`workflow::WorkflowEngine`], a generic finite-state
//!   machine over opaque state/command tokens, validated at construction and
//!   queried as pure reads.
//!
//! No part performs I/O of its own; handlers are the only asynchronous seam.
//!
//! # Example
//!
//! ```rust
//! use railyard::workflow::WorkflowEngine;
//! use railyard::{command_enum, state_enum};
//!
//! state_enum! {
//!     enum DocumentState {
//!         Draft,
//!         Published,
//!     }
//! }
//!
//! command_enum! {
//!     enum DocumentCommand {
//!         Publish,
//!     }
//! }
//!
//! let engine = WorkflowEngine::builder()
//!     .add_transition(DocumentState::Draft, DocumentCommand::Publish, DocumentState::Published)
//!     .build()
//!     .expect("unambiguous table");
//!
//! let mut state = DocumentState::Draft;
//! engine
//!     .get_next(&state, &DocumentCommand::Publish)
//!     .tap_success(|next| state = next.clone());
//! assert_eq!(state, DocumentState::Published);
//! ```

pub mod macros;
pub mod outcome;
pub mod pipeline;
pub mod workflow;

// Re-export commonly used types
pub use outcome::{combine, Failure, Outcome};
pub use pipeline::{
    AuditRecord, AuditTrail, Handler, Pipeline, PostProcessor, RequestLogger, RequestValidator,
};
pub use workflow::{BuildError, Transition, WorkflowBuilder, WorkflowEngine};
