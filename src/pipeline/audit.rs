//! Stock post-processors for logging and auditing.

use crate::outcome::{Failure, Outcome};
use crate::pipeline::post_process::PostProcessor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Post-processor that logs every handled request via `tracing`.
///
/// Successful results are logged at `info`, failures at `warn` with the
/// failure messages. The request and response payloads are not logged; only
/// outcome facts are, so no `Debug` bound is imposed on either type.
pub struct RequestLogger {
    operation: String,
}

impl RequestLogger {
    /// Create a logger tagged with the name of the operation it observes.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

impl<Req, Res> PostProcessor<Req, Res> for RequestLogger {
    fn on_success(&self, _request: &Req, _value: &Res) {
        tracing::info!(operation = %self.operation, "request handled");
    }

    fn on_failure(&self, _request: &Req, failures: &[Failure]) {
        let messages: Vec<&str> = failures.iter().map(Failure::message).collect();
        tracing::warn!(
            operation = %self.operation,
            failures = failures.len(),
            messages = ?messages,
            "request failed"
        );
    }
}

/// One audit trail entry: when a request finished and how.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the pipeline finished handling the request.
    pub at: DateTime<Utc>,
    /// Whether the final outcome was a success.
    pub succeeded: bool,
    /// The failures of an unsuccessful outcome, in order. Empty on success.
    pub failures: Vec<Failure>,
}

/// Post-processor that records every handled request in memory.
///
/// The trail is cheaply cloneable; clones share the same records, so a
/// caller can keep one clone and register another with the pipeline:
///
/// ```rust
/// use async_trait::async_trait;
/// use railyard::{AuditTrail, Handler, Outcome, Pipeline};
/// use tokio_util::sync::CancellationToken;
///
/// struct Nop;
///
/// #[async_trait]
/// impl Handler<(), ()> for Nop {
///     async fn handle(&self, _request: &(), _cancel: &CancellationToken) -> Outcome<()> {
///         Outcome::success(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let trail = AuditTrail::new();
/// let pipeline = Pipeline::new(Nop).add_post_processor(trail.clone());
///
/// pipeline.handle(&(), &CancellationToken::new()).await;
/// assert_eq!(trail.records().len(), 1);
/// assert!(trail.records()[0].succeeded);
/// # }
/// ```
#[derive(Clone, Default)]
pub struct AuditTrail {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl AuditTrail {
    /// Create an empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records gathered so far, in observation order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().expect("audit trail lock poisoned").clone()
    }
}

impl<Req, Res> PostProcessor<Req, Res> for AuditTrail {
    fn on_both(&self, _request: &Req, result: &Outcome<Res>) {
        let record = AuditRecord {
            at: Utc::now(),
            succeeded: result.is_success(),
            failures: result.failures().to_vec(),
        };
        self.records
            .lock()
            .expect("audit trail lock poisoned")
            .push(record);
    }
}
