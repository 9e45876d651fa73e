//! Error types for the ViaCEP gateway.
//!
//! Two layers:
//!
//! - [`UpstreamError`]: why a call to the upstream service failed. Only the
//!   upstream client produces these.
//! - [`ViaCepError`]: what callers of the gateway see. Upstream failures
//!   surface as a single [`ViaCepError::Integration`] variant.
//!
//! A "not found" answer from upstream is not an error anywhere in this
//! hierarchy; it is an empty result list.

use thiserror::Error;

/// Result type alias using `ViaCepError`.
pub type Result<T> = std::result::Result<T, ViaCepError>;

/// Failure of a call to the upstream lookup service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// Upstream unreachable, connection error or timeout, after all retries.
    #[error("upstream unavailable after {attempts} attempt(s): {reason}")]
    Transient {
        /// Number of attempts made, including the first one
        attempts: u32,
        /// Last transport error message
        reason: String,
    },

    /// Upstream kept answering 429 until the retry budget ran out.
    #[error("upstream throttled the request {attempts} time(s)")]
    Throttled {
        /// Number of attempts made, including the first one
        attempts: u32,
    },

    /// Upstream answered with a success status but an unparseable body.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Returns true if a later call might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UpstreamError::Transient { .. } | UpstreamError::Throttled { .. }
        )
    }
}

/// Main error type for all gateway operations.
#[derive(Debug, Error)]
pub enum ViaCepError {
    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM INTEGRATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// The upstream lookup service could not produce an answer.
    #[error("upstream integration error: {0}")]
    Integration(#[from] UpstreamError),

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION & CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL
    // ═══════════════════════════════════════════════════════════════════════════

    /// Internal invariant violation (should never happen).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ViaCepError {
    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        match self {
            ViaCepError::Integration(e) => e.is_recoverable(),
            _ => false,
        }
    }

    /// Returns true if this error came from the upstream service.
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, ViaCepError::Integration(_))
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ViaCepError::Validation(_))
    }
}
