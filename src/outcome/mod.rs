//! Railway-oriented success/failure outcomes.
//!
//! An [`Outcome`] carries either a success value or an ordered, non-empty
//! list of [`Failure`]s. Combinators chain dependent steps without
//! exceptions: [`Outcome::and_then`] short-circuits, [`combine`] aggregates
//! independent results, and the `tap` family runs side effects without
//! touching the outcome.

pub mod combine;
pub mod failure;
pub mod result;

pub use combine::combine;
pub use failure::Failure;
pub use result::Outcome;
