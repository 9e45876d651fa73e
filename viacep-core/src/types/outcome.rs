//! Classified upstream answers.

use super::AddressResult;

/// What a completed upstream call produced.
///
/// Only hard failures are errors ([`crate::UpstreamError`]); every variant
/// here is a usable answer.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Success status with a decoded body (possibly an empty list).
    Found(Vec<AddressResult>),
    /// Upstream answered 204 or 404.
    NotFound,
    /// Upstream answered some other non-success status.
    Degraded {
        /// HTTP status code of the final attempt
        status: u16,
    },
}

impl FetchOutcome {
    /// Returns the result list, empty for anything but a found answer.
    pub fn into_results(self) -> Vec<AddressResult> {
        match self {
            FetchOutcome::Found(results) => results,
            FetchOutcome::NotFound | FetchOutcome::Degraded { .. } => Vec::new(),
        }
    }

    /// Returns true if this outcome carries no address.
    pub fn is_empty(&self) -> bool {
        match self {
            FetchOutcome::Found(results) => results.is_empty(),
            FetchOutcome::NotFound | FetchOutcome::Degraded { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_without_results_are_empty() {
        assert!(FetchOutcome::NotFound.is_empty());
        assert!(FetchOutcome::Degraded { status: 503 }.is_empty());
        assert!(FetchOutcome::Found(vec![]).is_empty());
        assert!(FetchOutcome::Degraded { status: 400 }.into_results().is_empty());
    }

    #[test]
    fn test_found_keeps_results() {
        let outcome = FetchOutcome::Found(vec![AddressResult::with_postal_code("01310-100")]);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.into_results().len(), 1);
    }
}
