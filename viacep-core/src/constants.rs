//! Gateway constants.
//!
//! Defaults for the upstream endpoint, caching, history and retry behavior.
//! Every value here can be overridden through the config structs of the
//! crate that consumes it.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the public ViaCEP service.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Path prefix of the address search endpoint.
/// The full path is `/ws/{state}/{city}/{street}/json`.
pub const SEARCH_PATH_PREFIX: &str = "/ws";

/// Response format suffix appended after the street segment.
pub const SEARCH_PATH_FORMAT: &str = "json";

/// Per-attempt request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// RETRY POLICY
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of retries after the first attempt.
pub const MAX_RETRIES: u32 = 3;

/// Base unit of the exponential backoff.
/// Retry `i` waits `RETRY_BASE_DELAY * 2^i` (2s, 4s, 8s).
pub const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Lifetime of a cached lookup result in seconds (10 minutes).
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

// ═══════════════════════════════════════════════════════════════════════════════
// HISTORY
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of records held by the history log.
pub const HISTORY_CAPACITY: usize = 1000;

/// Number of records returned by the history listing.
pub const DEFAULT_RECENT: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// QUERY SHAPE
// ═══════════════════════════════════════════════════════════════════════════════

/// Exact length of a state (UF) code.
pub const STATE_CODE_LEN: usize = 2;

/// Minimum accepted city length.
pub const MIN_CITY_LEN: usize = 2;

/// Minimum accepted street length.
pub const MIN_STREET_LEN: usize = 3;
