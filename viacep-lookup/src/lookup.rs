//! Lookup orchestration: cache, upstream, history.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use viacep_cache::{CacheConfig, CacheStats, ResultCache};
use viacep_client::{ClientConfig, RetryPolicy, ViaCepClient};
use viacep_core::constants::{DEFAULT_CACHE_TTL_SECONDS, HISTORY_CAPACITY};
use viacep_core::error::{Result, ViaCepError};
use viacep_core::traits::AddressSource;
use viacep_core::types::{AddressQuery, AddressResult, HistoryRecord};
use viacep_history::HistoryLog;

/// Lookup configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Upstream client configuration
    pub client: ClientConfig,
    /// Whether to use caching
    pub enable_cache: bool,
    /// Cache TTL
    pub cache_ttl: Duration,
    /// Maximum number of history records
    pub history_capacity: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            enable_cache: true,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl LookupConfig {
    /// Creates a config with the given upstream base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientConfig::new(base_url),
            ..Default::default()
        }
    }

    /// Replaces the upstream retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.client.retry = retry;
        self
    }

    /// Sets the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the history bound.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Disables caching.
    pub fn no_cache(mut self) -> Self {
        self.enable_cache = false;
        self
    }
}

/// Address lookup orchestrator.
///
/// Answers a query by:
/// 1. Checking the result cache under the query's case-normalized key
/// 2. On a miss, asking the upstream source
/// 3. Caching non-empty answers; empty ones are never cached
/// 4. Recording the query in the history log
///
/// The history log records every query that completes, whether it was a
/// cache hit, a miss, or found nothing. Failed queries are not recorded.
pub struct AddressLookup {
    source: Arc<dyn AddressSource>,
    cache: Option<ResultCache>,
    history: Arc<HistoryLog>,
    config: LookupConfig,
}

impl AddressLookup {
    /// Creates a lookup against the public ViaCEP service.
    pub fn new() -> Result<Self> {
        Self::with_config(LookupConfig::default())
    }

    /// Creates a lookup with a real upstream client built from `config`.
    pub fn with_config(config: LookupConfig) -> Result<Self> {
        let client = ViaCepClient::with_config(config.client.clone())?;
        Ok(Self::with_source(Arc::new(client), config))
    }

    /// Creates a lookup over any upstream source.
    pub fn with_source(source: Arc<dyn AddressSource>, config: LookupConfig) -> Self {
        let cache = if config.enable_cache {
            Some(ResultCache::with_config(CacheConfig::with_ttl(config.cache_ttl)))
        } else {
            None
        };

        Self {
            source,
            cache,
            history: Arc::new(HistoryLog::with_capacity(config.history_capacity)),
            config,
        }
    }

    /// Uses a shared history log instead of the private one.
    pub fn with_history(mut self, history: Arc<HistoryLog>) -> Self {
        self.history = history;
        self
    }

    /// Looks up addresses for a state, city and street.
    ///
    /// Returns a possibly-empty list. Errors only when upstream could not
    /// produce an answer and nothing was cached.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lookup = AddressLookup::new()?;
    /// let found = lookup.lookup_address("SP", "Sao Paulo", "Avenida Paulista").await?;
    /// ```
    pub async fn lookup_address(
        &self,
        state: &str,
        city: &str,
        street: &str,
    ) -> Result<Vec<AddressResult>> {
        let query = AddressQuery::new(state, city, street);
        Ok(self.lookup(&query).await?.results)
    }

    /// Looks up a query and reports whether the answer came from cache.
    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn lookup(&self, query: &AddressQuery) -> Result<LookupResult> {
        let key = query.cache_key();

        if let Some(cache) = &self.cache {
            if let Some(results) = cache.get(&key) {
                debug!(%key, count = results.len(), "Cache hit");
                self.history.record(query);
                return Ok(LookupResult {
                    results,
                    from_cache: true,
                });
            }
        }

        debug!(%key, "Cache miss, querying upstream");

        let outcome = self.source.fetch(query).await.map_err(|e| {
            error!(error = %e, "Upstream integration failed");
            ViaCepError::Integration(e)
        })?;

        let results = outcome.into_results();

        if results.is_empty() {
            debug!("No address found, result not cached");
        } else {
            info!(count = results.len(), "Resolved address");
            if let Some(cache) = &self.cache {
                cache.set_with_ttl(key, results.clone(), self.config.cache_ttl);
            }
        }

        self.history.record(query);

        Ok(LookupResult {
            results,
            from_cache: false,
        })
    }

    /// Returns the `n` most recent queries, oldest to newest.
    pub fn recent_history(&self, n: usize) -> Vec<HistoryRecord> {
        self.history.list_recent(n)
    }

    /// Returns the history log.
    pub fn history(&self) -> &Arc<HistoryLog> {
        &self.history
    }

    /// Returns cache statistics, or None when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResultCache::stats)
    }

    /// Clears the result cache.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

/// Result of a lookup with metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LookupResult {
    /// Matching addresses, possibly empty
    pub results: Vec<AddressResult>,
    /// Whether the answer came from cache
    pub from_cache: bool,
}
