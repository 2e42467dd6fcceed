//! Handlers: asynchronous request execution.

use crate::outcome::Outcome;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Capability that turns a validated request into a response outcome.
///
/// Handlers are the only asynchronous, potentially I/O-performing step of a
/// pipeline. The cancellation token is threaded to the handler alone;
/// validators and post-processors are synchronous and do not observe it.
///
/// Handlers that are themselves cancellation-aware should return whatever
/// outcome describes the abandoned work; the pipeline never swallows it.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use railyard::{Handler, Outcome};
/// use tokio_util::sync::CancellationToken;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Handler<String, String> for Echo {
///     async fn handle(&self, request: &String, _cancel: &CancellationToken) -> Outcome<String> {
///         Outcome::success(request.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Handler<Req, Res>: Send + Sync {
    /// Execute the request, producing a response outcome.
    async fn handle(&self, request: &Req, cancel: &CancellationToken) -> Outcome<Res>;
}
