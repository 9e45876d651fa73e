//! App state: lookup orchestrator and config.

use std::str::FromStr;
use std::time::Duration;

use viacep_core::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECONDS, DEFAULT_TIMEOUT_SECONDS, HISTORY_CAPACITY,
    MAX_RETRIES,
};
use viacep_core::error::Result;
use viacep_lookup::{AddressLookup, LookupConfig, RetryPolicy};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Upstream base URL
    pub base_url: String,
    /// Per-request upstream timeout in seconds
    pub timeout_seconds: u64,
    /// Upstream retries after the first attempt
    pub max_retries: u32,
    /// Cache TTL in seconds
    pub cache_ttl_seconds: u64,
    /// Maximum number of history records
    pub history_capacity: usize,
    /// Whether lookups go through the result cache
    pub enable_cache: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_retries: MAX_RETRIES,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            history_capacity: HISTORY_CAPACITY,
            enable_cache: true,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment, loading `.env` first.
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        Self {
            base_url: std::env::var("VIACEP_BASE_URL").unwrap_or(defaults.base_url),
            timeout_seconds: env_or("VIACEP_TIMEOUT_SECONDS", defaults.timeout_seconds),
            max_retries: env_or("VIACEP_MAX_RETRIES", defaults.max_retries),
            cache_ttl_seconds: env_or("CACHE_TTL_SECONDS", defaults.cache_ttl_seconds),
            history_capacity: env_or("HISTORY_CAPACITY", defaults.history_capacity),
            enable_cache: std::env::var("ENABLE_CACHE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enable_cache),
        }
    }

    /// Builds the orchestrator configuration.
    pub fn to_lookup_config(&self) -> LookupConfig {
        let mut config = LookupConfig::with_base_url(&self.base_url)
            .with_retry(RetryPolicy::default().with_max_retries(self.max_retries))
            .with_cache_ttl(Duration::from_secs(self.cache_ttl_seconds))
            .with_history_capacity(self.history_capacity);
        config.client.timeout_seconds = self.timeout_seconds.max(1);

        if !self.enable_cache {
            config = config.no_cache();
        }
        config
    }
}

/// Anything other than an explicit off value enables the flag.
fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    !["false", "0", "no", "off"]
        .iter()
        .any(|off| raw.eq_ignore_ascii_case(off))
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

/// Shared request state.
pub struct AppState {
    /// Lookup orchestrator
    pub lookup: AddressLookup,
}

impl AppState {
    /// Builds state with a live upstream client.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let lookup = AddressLookup::with_config(config.to_lookup_config())?;
        Ok(Self { lookup })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_lookup_config() {
        let config = ApiConfig::default().to_lookup_config();
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client.retry.max_retries, 3);
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.history_capacity, 1000);
        assert!(config.enable_cache);
    }

    #[test]
    fn test_overrides_flow_into_lookup_config() {
        let api = ApiConfig {
            base_url: "http://localhost:9999".into(),
            timeout_seconds: 5,
            max_retries: 1,
            cache_ttl_seconds: 60,
            history_capacity: 50,
            enable_cache: false,
        };
        let config = api.to_lookup_config();
        assert_eq!(config.client.base_url, "http://localhost:9999");
        assert_eq!(config.client.timeout_seconds, 5);
        assert_eq!(config.client.retry.max_retries, 1);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.history_capacity, 50);
        assert!(!config.enable_cache);
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("VIACEP_TEST_SURELY_UNSET_KEY", 7u32), 7);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let api = ApiConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(AppState::new(&api).is_err());
    }

    #[test]
    fn test_extreme_limits_build_state() {
        let api = ApiConfig {
            cache_ttl_seconds: u64::MAX,
            history_capacity: usize::MAX,
            ..Default::default()
        };
        let state = AppState::new(&api).unwrap();
        assert_eq!(state.lookup.history().capacity(), usize::MAX);
    }

    #[test_case("false" ; "lowercase false")]
    #[test_case("FALSE" ; "uppercase false")]
    #[test_case("0" ; "zero")]
    #[test_case("no" ; "no")]
    #[test_case(" Off " ; "padded off")]
    fn test_flag_off_values(raw: &str) {
        assert!(!parse_flag(raw));
    }

    #[test_case("true" ; "true")]
    #[test_case("1" ; "one")]
    #[test_case("yes" ; "yes")]
    fn test_flag_on_values(raw: &str) {
        assert!(parse_flag(raw));
    }
}
