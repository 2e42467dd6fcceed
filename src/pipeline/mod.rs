//! The request-handling pipeline: validate, handle, post-process.
//!
//! A [`Pipeline`] decorates an inner asynchronous [`Handler`] with
//! synchronous [`RequestValidator`]s and [`PostProcessor`]s. All validators
//! run and their failures are aggregated before the handler is (or is not)
//! invoked; all post-processors observe the final result before the call
//! returns.

pub mod audit;
pub mod decorator;
pub mod handler;
pub mod post_process;
pub mod validator;

pub use audit::{AuditRecord, AuditTrail, RequestLogger};
pub use decorator::Pipeline;
pub use handler::Handler;
pub use post_process::PostProcessor;
pub use validator::RequestValidator;
