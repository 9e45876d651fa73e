//! Common traits for the gateway.
//!
//! These traits define the seams between the orchestrator and its
//! collaborators, enabling substitution in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::types::{AddressQuery, FetchOutcome};

// ═══════════════════════════════════════════════════════════════════════════════
// ADDRESS SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface to the upstream address-lookup service.
///
/// Implementations might use:
/// - The ViaCEP HTTP API (production)
/// - A canned or counting fake (tests)
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Looks up addresses matching the query.
    ///
    /// # Flow
    /// 1. Build the request for the query
    /// 2. Call upstream, retrying transient failures
    /// 3. Classify the final response
    ///
    /// Not-found and degraded answers are `Ok`; only unreachable,
    /// throttled-out or undecodable answers are `Err`.
    async fn fetch(&self, query: &AddressQuery) -> Result<FetchOutcome, UpstreamError>;
}

#[async_trait]
impl<T: AddressSource + ?Sized> AddressSource for Arc<T> {
    async fn fetch(&self, query: &AddressQuery) -> Result<FetchOutcome, UpstreamError> {
        (**self).fetch(query).await
    }
}
