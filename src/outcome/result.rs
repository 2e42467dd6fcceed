//! The Outcome type: success or an ordered list of failures.

use super::failure::Failure;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Success/failure container used throughout the crate.
///
/// An `Outcome<T>` is either a success carrying a value of type `T`, or a
/// failure carrying one or more [`Failure`]s. The void variant `Outcome`
/// (that is, `Outcome<()>`) describes operations that succeed without
/// producing a value, such as request validation.
///
/// Outcomes are constructed once and never mutated. The representation is
/// private so the core invariants hold by construction:
///
/// - a success has no failures;
/// - a failure has at least one failure and no value.
///
/// # Example
///
/// ```rust
/// use railyard::{Failure, Outcome};
///
/// let parsed: Outcome<u32> = Outcome::success(42);
/// assert!(parsed.is_success());
///
/// let rejected: Outcome<u32> = Outcome::fail(Failure::for_field("Must be positive", "amount"));
/// assert!(rejected.is_failure());
/// assert_eq!(rejected.failures().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    result: Result<T, Vec<Failure>>,
}

impl<T> Outcome<T> {
    /// Create a success outcome wrapping `value`.
    pub fn success(value: T) -> Self {
        Self { result: Ok(value) }
    }

    /// Create a failure outcome from a non-empty list of failures.
    ///
    /// # Panics
    ///
    /// Panics if `failures` is empty. A failure with zero reasons is a
    /// programming mistake, not a recoverable condition.
    pub fn failure(failures: Vec<Failure>) -> Self {
        assert!(
            !failures.is_empty(),
            "a failure outcome requires at least one Failure"
        );
        Self {
            result: Err(failures),
        }
    }

    /// Create a failure outcome from a single failure.
    pub fn fail(failure: Failure) -> Self {
        Self {
            result: Err(vec![failure]),
        }
    }

    /// Create a failure outcome from a bare message.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::fail(Failure::new(message))
    }

    /// True when this outcome is a success.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// True when this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The failures, in order. Empty for a success outcome.
    pub fn failures(&self) -> &[Failure] {
        match &self.result {
            Ok(_) => &[],
            Err(failures) => failures,
        }
    }

    /// Consume the outcome, yielding the success value if any.
    pub fn into_value(self) -> Option<T> {
        self.result.ok()
    }

    /// Consume the outcome, yielding its failures. Empty for a success.
    pub fn into_failures(self) -> Vec<Failure> {
        self.result.err().unwrap_or_default()
    }

    /// Consume the outcome, yielding the underlying `Result`.
    ///
    /// The error side is non-empty by construction.
    pub fn into_result(self) -> Result<T, Vec<Failure>> {
        self.result
    }

    /// Chain a dependent step, short-circuiting on failure.
    ///
    /// On success, `next` receives the value and its outcome is returned.
    /// On failure, `next` is never invoked and an equivalent failure of the
    /// new type is returned. The laziness matters: downstream logic must not
    /// run on invalid input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Outcome;
    ///
    /// let doubled = Outcome::success(21).and_then(|n: u32| Outcome::success(n * 2));
    /// assert_eq!(doubled.value(), Some(&42));
    ///
    /// let skipped = Outcome::<u32>::fail_with("bad input")
    ///     .and_then(|_| -> Outcome<u32> { unreachable!("never invoked on failure") });
    /// assert!(skipped.is_failure());
    /// ```
    pub fn and_then<U>(self, next: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self.result {
            Ok(value) => next(value),
            Err(failures) => Outcome {
                result: Err(failures),
            },
        }
    }

    /// Transform a success value; failures pass through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.result {
            Ok(value) => Outcome::success(f(value)),
            Err(failures) => Outcome {
                result: Err(failures),
            },
        }
    }

    /// Run a side effect with the whole outcome, returning it unchanged.
    pub fn tap(self, f: impl FnOnce(&Self)) -> Self {
        f(&self);
        self
    }

    /// Run a side effect with the success value, if any, returning the
    /// outcome unchanged.
    pub fn tap_success(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self.result {
            f(value);
        }
        self
    }

    /// Run a side effect with the failures, if any, returning the outcome
    /// unchanged.
    pub fn tap_failure(self, f: impl FnOnce(&[Failure])) -> Self {
        if let Err(failures) = &self.result {
            f(failures);
        }
        self
    }

    /// Explicitly discard the success value, yielding a void outcome.
    ///
    /// This is the only conversion from `Outcome<T>` to `Outcome`; there is
    /// deliberately no implicit coercion that could silently lose a value.
    pub fn discard_value(self) -> Outcome {
        match self.result {
            Ok(_) => Outcome::success(()),
            Err(failures) => Outcome {
                result: Err(failures),
            },
        }
    }
}

/// Serialized as the transport boundary expects: a success flag, the value
/// when present, and the ordered failure list.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Outcome", 3)?;
        out.serialize_field("is_success", &self.is_success())?;
        out.serialize_field("value", &self.value())?;
        out.serialize_field("failures", &self.failures())?;
        out.end()
    }
}
