//! The Failure value: one reason an outcome is unsuccessful.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One reason an [`Outcome`](super::Outcome) is unsuccessful.
///
/// Failures are immutable values with structural equality. Duplicates are
/// legal and preserved in order when outcomes are aggregated; nothing in
/// this crate deduplicates them.
///
/// The `message` is user-facing. The optional `field` names the offending
/// input field so a client can map the message onto a form control.
///
/// # Example
///
/// ```rust
/// use railyard::Failure;
///
/// let missing = Failure::for_field("Name must not be empty", "name");
/// assert_eq!(missing.message(), "Name must not be empty");
/// assert_eq!(missing.field(), Some("name"));
///
/// let general = Failure::new("Request quota exhausted");
/// assert_eq!(general.field(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    message: String,
    field: Option<String>,
}

impl Failure {
    /// Create a failure with a message and no field attribution.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a failure attributed to a named input field.
    pub fn for_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending input field, if the failure is field-addressable.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} (field: {})", self.message, field),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_carries_message() {
        let failure = Failure::new("Something went wrong");
        assert_eq!(failure.message(), "Something went wrong");
        assert_eq!(failure.field(), None);
    }

    #[test]
    fn failure_carries_field_attribution() {
        let failure = Failure::for_field("Must not be empty", "email");
        assert_eq!(failure.message(), "Must not be empty");
        assert_eq!(failure.field(), Some("email"));
    }

    #[test]
    fn equality_is_structural() {
        let a = Failure::for_field("Must not be empty", "email");
        let b = Failure::for_field("Must not be empty", "email");
        let c = Failure::for_field("Must not be empty", "name");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_includes_field_when_present() {
        let with_field = Failure::for_field("Must not be empty", "email");
        assert_eq!(with_field.to_string(), "Must not be empty (field: email)");

        let without_field = Failure::new("Quota exhausted");
        assert_eq!(without_field.to_string(), "Quota exhausted");
    }

    #[test]
    fn failure_roundtrips_through_json() {
        let failure = Failure::for_field("Must not be empty", "email");
        let json = serde_json::to_string(&failure).unwrap();
        let back: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(failure, back);
    }

    #[test]
    fn absent_field_serializes_as_null() {
        let failure = Failure::new("Quota exhausted");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["message"], "Quota exhausted");
        assert!(json["field"].is_null());
    }
}
