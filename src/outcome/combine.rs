//! Aggregation of independent outcomes.

use super::failure::Failure;
use super::result::Outcome;

/// Combine many void outcomes into one.
///
/// The result is a success iff every input is a success. Otherwise it is a
/// failure whose failures are the concatenation, in input order, of every
/// failed input's failures. Nothing short-circuits and nothing is
/// deduplicated: the caller gets complete information about everything that
/// failed, which is the point of aggregating (e.g. showing all form errors
/// at once).
///
/// Combining an empty sequence yields success: no failures means none
/// failed.
///
/// # Example
///
/// ```rust
/// use railyard::{combine, Failure, Outcome};
///
/// let all_ok = combine([Outcome::success(()), Outcome::success(())]);
/// assert!(all_ok.is_success());
///
/// let mixed = combine([
///     Outcome::success(()),
///     Outcome::fail(Failure::for_field("Must not be empty", "name")),
///     Outcome::fail(Failure::for_field("Must be positive", "amount")),
/// ]);
/// assert_eq!(mixed.failures().len(), 2);
/// assert_eq!(mixed.failures()[0].field(), Some("name"));
/// ```
pub fn combine<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    let failures: Vec<Failure> = outcomes
        .into_iter()
        .flat_map(Outcome::into_failures)
        .collect();

    if failures.is_empty() {
        Outcome::success(())
    } else {
        Outcome::failure(failures)
    }
}
