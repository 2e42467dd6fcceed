//! Post-processors: observers of handled requests.

use crate::outcome::{Failure, Outcome};

/// Capability invoked after handling, for side effects only.
///
/// Post-processors observe `(request, outcome)` once the pipeline's result
/// is known. They run on success and failure alike and cannot alter the
/// outcome: every hook takes shared references and returns nothing.
///
/// Three hooks are available, all defaulting to no-ops:
///
/// - [`on_both`](PostProcessor::on_both) — always invoked;
/// - [`on_success`](PostProcessor::on_success) — invoked with the value when
///   the outcome succeeded;
/// - [`on_failure`](PostProcessor::on_failure) — invoked with the failures
///   when it did not.
///
/// The provided [`process`](PostProcessor::process) dispatch calls
/// `on_both` first, then exactly one of the other two.
pub trait PostProcessor<Req, Res>: Send + Sync {
    /// Invoked for every handled request, successful or not.
    fn on_both(&self, _request: &Req, _result: &Outcome<Res>) {}

    /// Invoked only when the request was handled successfully.
    fn on_success(&self, _request: &Req, _value: &Res) {}

    /// Invoked only when handling failed.
    fn on_failure(&self, _request: &Req, _failures: &[Failure]) {}

    /// Dispatch to the hooks: `on_both`, then `on_success` or `on_failure`.
    fn process(&self, request: &Req, result: &Outcome<Res>) {
        self.on_both(request, result);
        match result.value() {
            Some(value) => self.on_success(request, value),
            None => self.on_failure(request, result.failures()),
        }
    }
}
