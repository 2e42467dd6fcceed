//! Request validators: synchronous acceptance checks.

use crate::outcome::Outcome;

/// Capability that inspects a request and reports whether it is acceptable.
///
/// Validators are pure, synchronous checks. They return a void [`Outcome`]:
/// success means the request passed this check; failure carries one or more
/// field-addressable reasons. The pipeline runs every registered validator
/// and aggregates the results, so a validator should report everything it
/// can see wrong, not just the first problem.
///
/// Any `Fn(&Req) -> Outcome` closure is a validator:
///
/// ```rust
/// use railyard::{Failure, Outcome, RequestValidator};
///
/// struct CreateUser {
///     name: String,
/// }
///
/// let name_present = |request: &CreateUser| {
///     if request.name.is_empty() {
///         Outcome::fail(Failure::for_field("Name must not be empty", "name"))
///     } else {
///         Outcome::success(())
///     }
/// };
///
/// let request = CreateUser { name: String::new() };
/// assert!(name_present.validate(&request).is_failure());
/// ```
pub trait RequestValidator<Req>: Send + Sync {
    /// Check the request, returning success or the reasons it is invalid.
    fn validate(&self, request: &Req) -> Outcome;
}

impl<Req, F> RequestValidator<Req> for F
where
    F: Fn(&Req) -> Outcome + Send + Sync,
{
    fn validate(&self, request: &Req) -> Outcome {
        self(request)
    }
}
