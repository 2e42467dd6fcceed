//! The pipeline decorator: validate, handle, post-process.

use crate::outcome::{combine, Outcome};
use crate::pipeline::handler::Handler;
use crate::pipeline::post_process::PostProcessor;
use crate::pipeline::validator::RequestValidator;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Decorates an inner [`Handler`] with validation and post-processing.
///
/// One call to [`handle`](Pipeline::handle) proceeds through three phases:
///
/// 1. **Validate** — every registered validator runs, even after one has
///    failed, and the results are aggregated with [`combine`]. Partial
///    validation information is strictly worse than complete information,
///    so nothing short-circuits here.
/// 2. **Handle** — only if validation succeeded, the inner handler is
///    awaited with the request and the cancellation token. On validation
///    failure the handler is never invoked and the aggregated failures are
///    returned as the typed result.
/// 3. **Post-process** — every registered post-processor observes
///    `(request, result)`, in registration order, on success and failure
///    alike. All post-processors complete before `handle` returns.
///
/// Collaborators are owned by the pipeline and trusted to speak `Outcome`;
/// a panicking collaborator unwinds through `handle` rather than being
/// converted into a failure.
///
/// `Pipeline` implements [`Handler`] itself, so pipelines nest: a pipeline
/// can serve as the inner handler of another pipeline.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use railyard::{Failure, Handler, Outcome, Pipeline};
/// use tokio_util::sync::CancellationToken;
///
/// struct Greet;
///
/// #[async_trait]
/// impl Handler<String, String> for Greet {
///     async fn handle(&self, name: &String, _cancel: &CancellationToken) -> Outcome<String> {
///         Outcome::success(format!("hello, {name}"))
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pipeline = Pipeline::new(Greet).add_request_validator(|name: &String| {
///     if name.is_empty() {
///         Outcome::fail(Failure::for_field("Name must not be empty", "name"))
///     } else {
///         Outcome::success(())
///     }
/// });
///
/// let cancel = CancellationToken::new();
/// let greeted = pipeline.handle(&"railyard".to_string(), &cancel).await;
/// assert_eq!(greeted.value(), Some(&"hello, railyard".to_string()));
///
/// let rejected = pipeline.handle(&String::new(), &cancel).await;
/// assert!(rejected.is_failure());
/// # }
/// ```
pub struct Pipeline<Req, Res> {
    inner: Box<dyn Handler<Req, Res>>,
    validators: Vec<Box<dyn RequestValidator<Req>>>,
    post_processors: Vec<Box<dyn PostProcessor<Req, Res>>>,
}

impl<Req, Res> Pipeline<Req, Res>
where
    Req: Send + Sync,
    Res: Send,
{
    /// Wrap an inner handler with an empty validator and post-processor set.
    pub fn new(inner: impl Handler<Req, Res> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            validators: Vec::new(),
            post_processors: Vec::new(),
        }
    }

    /// Register a validator. Validators run in registration order.
    pub fn add_request_validator(mut self, validator: impl RequestValidator<Req> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Register a post-processor. Post-processors run in registration order.
    pub fn add_post_processor(mut self, processor: impl PostProcessor<Req, Res> + 'static) -> Self {
        self.post_processors.push(Box::new(processor));
        self
    }

    /// Run the request through validation, handling, and post-processing.
    pub async fn handle(&self, request: &Req, cancel: &CancellationToken) -> Outcome<Res> {
        let validation = combine(self.validators.iter().map(|v| v.validate(request)));

        let result = if validation.is_success() {
            self.inner.handle(request, cancel).await
        } else {
            tracing::debug!(
                failures = validation.failures().len(),
                "request rejected by validators; inner handler skipped"
            );
            Outcome::failure(validation.into_failures())
        };

        tracing::trace!(
            post_processors = self.post_processors.len(),
            success = result.is_success(),
            "post-processing handled request"
        );
        for processor in &self.post_processors {
            processor.process(request, &result);
        }

        result
    }
}

#[async_trait]
impl<Req, Res> Handler<Req, Res> for Pipeline<Req, Res>
where
    Req: Send + Sync,
    Res: Send,
{
    async fn handle(&self, request: &Req, cancel: &CancellationToken) -> Outcome<Res> {
        Pipeline::handle(self, request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Failure;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler<u32, u32> for CountingHandler {
        async fn handle(&self, request: &u32, _cancel: &CancellationToken) -> Outcome<u32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(request + 1)
        }
    }

    fn counting_handler() -> (CountingHandler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingHandler {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    struct OrderRecorder {
        label: &'static str,
        log: Arc<std::sync::Mutex<Vec<&'static str>>>,
    }

    impl PostProcessor<u32, u32> for OrderRecorder {
        fn on_both(&self, _request: &u32, _result: &Outcome<u32>) {
            self.log.lock().unwrap().push(self.label);
        }
    }

    #[tokio::test]
    async fn all_validators_run_and_failures_aggregate_in_order() {
        let (handler, calls) = counting_handler();
        let second_ran = Arc::new(AtomicUsize::new(0));
        let second_ran_probe = Arc::clone(&second_ran);

        let pipeline = Pipeline::new(handler)
            .add_request_validator(|_: &u32| Outcome::fail(Failure::new("first wrong")))
            .add_request_validator(move |_: &u32| {
                second_ran_probe.fetch_add(1, Ordering::SeqCst);
                Outcome::fail(Failure::new("second wrong"))
            });

        let cancel = CancellationToken::new();
        let result = pipeline.handle(&1, &cancel).await;

        assert!(result.is_failure());
        let messages: Vec<&str> = result.failures().iter().map(Failure::message).collect();
        assert_eq!(messages, vec!["first wrong", "second wrong"]);
        // Second validator ran despite the first failing.
        assert_eq!(second_ran.load(Ordering::SeqCst), 1);
        // Inner handler never invoked on invalid input.
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_request_invokes_inner_handler_exactly_once() {
        let (handler, calls) = counting_handler();
        let pipeline =
            Pipeline::new(handler).add_request_validator(|_: &u32| Outcome::success(()));

        let cancel = CancellationToken::new();
        let result = pipeline.handle(&41, &cancel).await;

        assert_eq!(result.value(), Some(&42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pipeline_without_validators_handles_directly() {
        let (handler, calls) = counting_handler();
        let pipeline = Pipeline::new(handler);

        let cancel = CancellationToken::new();
        let result = pipeline.handle(&0, &cancel).await;

        assert_eq!(result.value(), Some(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn post_processors_run_in_registration_order_on_success() {
        let (handler, _) = counting_handler();
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(handler)
            .add_post_processor(OrderRecorder {
                label: "first",
                log: Arc::clone(&log),
            })
            .add_post_processor(OrderRecorder {
                label: "second",
                log: Arc::clone(&log),
            });

        let cancel = CancellationToken::new();
        pipeline.handle(&1, &cancel).await;

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn post_processor_registered_twice_runs_twice_even_on_failure() {
        let (handler, _) = counting_handler();
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(handler)
            .add_request_validator(|_: &u32| Outcome::fail(Failure::new("nope")))
            .add_post_processor(OrderRecorder {
                label: "audit",
                log: Arc::clone(&log),
            })
            .add_post_processor(OrderRecorder {
                label: "audit",
                log: Arc::clone(&log),
            });

        let cancel = CancellationToken::new();
        let result = pipeline.handle(&1, &cancel).await;

        assert!(result.is_failure());
        assert_eq!(*log.lock().unwrap(), vec!["audit", "audit"]);
    }

    #[tokio::test]
    async fn handler_outcome_passes_through_unchanged() {
        struct Failing;

        #[async_trait]
        impl Handler<u32, u32> for Failing {
            async fn handle(&self, _request: &u32, _cancel: &CancellationToken) -> Outcome<u32> {
                Outcome::fail(Failure::for_field("Balance too low", "amount"))
            }
        }

        let pipeline = Pipeline::new(Failing);
        let cancel = CancellationToken::new();
        let result = pipeline.handle(&1, &cancel).await;

        assert!(result.is_failure());
        assert_eq!(result.failures()[0].field(), Some("amount"));
    }

    #[tokio::test]
    async fn cancellation_token_reaches_the_inner_handler() {
        struct CancelEcho;

        #[async_trait]
        impl Handler<u32, bool> for CancelEcho {
            async fn handle(&self, _request: &u32, cancel: &CancellationToken) -> Outcome<bool> {
                Outcome::success(cancel.is_cancelled())
            }
        }

        let pipeline = Pipeline::new(CancelEcho);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = pipeline.handle(&1, &cancel).await;
        assert_eq!(result.value(), Some(&true));
    }

    #[tokio::test]
    async fn pipelines_nest_as_handlers() {
        let (handler, calls) = counting_handler();
        let inner_pipeline =
            Pipeline::new(handler).add_request_validator(|_: &u32| Outcome::success(()));

        let outer = Pipeline::new(inner_pipeline)
            .add_request_validator(|request: &u32| {
                if *request == 0 {
                    Outcome::fail(Failure::for_field("Must be non-zero", "request"))
                } else {
                    Outcome::success(())
                }
            });

        let cancel = CancellationToken::new();

        let rejected = outer.handle(&0, &cancel).await;
        assert!(rejected.is_failure());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let accepted = outer.handle(&9, &cancel).await;
        assert_eq!(accepted.value(), Some(&10));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
