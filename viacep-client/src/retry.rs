//! Retry policy for upstream calls.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use viacep_core::constants::{MAX_RETRIES, RETRY_BASE_DELAY};

/// Bounded exponential backoff, no jitter.
///
/// Retry `i` (1-based) waits `base_delay * 2^i`. With the defaults that is
/// 2s, 4s and 8s across three retries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub max_retries: u32,
    /// Backoff unit in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay_ms: RETRY_BASE_DELAY.as_millis() as u64,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the backoff unit.
    pub fn with_base_delay(mut self, base: Duration) -> Self {
        self.base_delay_ms = base.as_millis() as u64;
        self
    }

    /// Delay to wait before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Whether another retry is allowed after `retries_done` retries.
    pub fn has_budget(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }

    /// Statuses worth retrying: throttling (429), request timeout (408)
    /// and server errors (5xx).
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
            || status.is_server_error()
    }

    /// Transport failures worth retrying: connection errors, timeouts and
    /// requests that failed in flight. Builder, redirect and body errors are
    /// final.
    pub fn is_retryable_error(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout() || err.is_request()
    }

    /// Runs `attempt` until `should_retry` rejects its output or the budget
    /// is spent, sleeping [`delay_for`](Self::delay_for) between attempts.
    ///
    /// Returns the last output and the number of attempts made.
    pub async fn execute<T, F, Fut>(&self, mut attempt: F, should_retry: impl Fn(&T) -> bool) -> (T, u32)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut retries = 0u32;
        loop {
            let output = attempt().await;
            if !(should_retry(&output) && self.has_budget(retries)) {
                return (output, retries + 1);
            }

            retries += 1;
            let delay = self.delay_for(retries);
            warn!(retry = retries, ?delay, "Transient upstream failure, retrying");
            tokio::time::sleep(delay).await;
        }
    }
}
