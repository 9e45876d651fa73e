//! In-memory TTL cache for lookup results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

use viacep_core::constants::DEFAULT_CACHE_TTL_SECONDS;
use viacep_core::types::{AddressResult, CacheKey};

/// Cache entry with an absolute expiration.
///
/// `expires_at` is `None` when `now + ttl` is past what `Instant` can
/// represent; such an entry never expires.
#[derive(Clone)]
struct CacheEntry {
    results: Vec<AddressResult>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(at) if now >= at)
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL
    pub default_ttl: Duration,
    /// Whether writes purge expired entries once the map grows past `cleanup_threshold`
    pub auto_cleanup: bool,
    /// Entry count above which a write triggers a purge
    pub cleanup_threshold: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            auto_cleanup: true,
            cleanup_threshold: 4096,
        }
    }
}

impl CacheConfig {
    /// Creates a config with the given default TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            default_ttl: ttl,
            ..Default::default()
        }
    }
}

/// In-memory cache for lookup results, keyed by [`CacheKey`].
///
/// Thread-safe and supports TTL-based expiration. There is no capacity
/// bound; entries leave only by expiring or by explicit removal. Racing
/// writes to one key are last-writer-wins.
pub struct ResultCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    config: CacheConfig,
}

impl ResultCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Gets cached results by key.
    ///
    /// Returns None if not cached or expired.
    pub fn get(&self, key: &CacheKey) -> Option<Vec<AddressResult>> {
        let now = Instant::now();
        let entries = self.entries.read();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.results.clone()),
            _ => None,
        }
    }

    /// Caches results with the default TTL.
    pub fn set(&self, key: CacheKey, results: Vec<AddressResult>) {
        self.set_with_ttl(key, results, self.config.default_ttl);
    }

    /// Caches results with a custom TTL.
    pub fn set_with_ttl(&self, key: CacheKey, results: Vec<AddressResult>, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write();

        if self.config.auto_cleanup && entries.len() >= self.config.cleanup_threshold {
            let before = entries.len();
            entries.retain(|_, e| !e.is_expired(now));
            trace!(purged = before - entries.len(), "Purged expired cache entries");
        }

        entries.insert(key, CacheEntry {
            results,
            expires_at: now.checked_add(ttl),
        });
    }

    /// Removes a cached entry.
    pub fn remove(&self, key: &CacheKey) {
        self.entries.write().remove(key);
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all expired entries.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        self.entries.write().retain(|_, e| !e.is_expired(now));
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired(now)).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            valid_entries: entries.len().saturating_sub(expired),
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    /// Entries stored, expired ones included
    pub total_entries: usize,
    /// Entries past their TTL and not yet purged
    pub expired_entries: usize,
    /// Entries a read would still return
    pub valid_entries: usize,
}
