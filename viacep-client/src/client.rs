//! ViaCEP client implementation.
//!
//! One GET per attempt against `{base_url}/ws/{state}/{city}/{street}/json`.
//! Each path segment is percent-encoded on its own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use viacep_core::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, SEARCH_PATH_FORMAT, SEARCH_PATH_PREFIX,
};
use viacep_core::error::{Result, UpstreamError, ViaCepError};
use viacep_core::traits::AddressSource;
use viacep_core::types::{AddressQuery, AddressResult, FetchOutcome};

use crate::retry::RetryPolicy;

/// Client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the upstream service (scheme and host, optional path prefix)
    pub base_url: String,
    /// Per-attempt request timeout in seconds
    pub timeout_seconds: u64,
    /// Retry policy for transient failures
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Creates config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs().max(1);
        self
    }
}

/// Client for the ViaCEP address search endpoint.
pub struct ViaCepClient {
    config: ClientConfig,
    base_url: String,
    http_client: reqwest::Client,
}

impl ViaCepClient {
    /// Creates a client against the public ViaCEP service.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given config.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let parsed = url::Url::parse(&config.base_url).map_err(|e| {
            ViaCepError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ViaCepError::Config(format!(
                "unsupported scheme '{}' in base URL",
                parsed.scheme()
            )));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ViaCepError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            http_client,
        })
    }

    /// Builds the search URL for a query.
    pub fn search_url(&self, query: &AddressQuery) -> String {
        format!(
            "{}{}/{}/{}/{}/{}",
            self.base_url,
            SEARCH_PATH_PREFIX,
            urlencoding::encode(&query.state),
            urlencoding::encode(&query.city),
            urlencoding::encode(&query.street),
            SEARCH_PATH_FORMAT,
        )
    }

    /// Searches addresses matching the query.
    ///
    /// Retries transport failures, 408, 429 and 5xx answers up to the
    /// policy's budget, sleeping between attempts. The final attempt is then
    /// classified:
    ///
    /// - transport failure → [`UpstreamError::Transient`]
    /// - 429 → [`UpstreamError::Throttled`]
    /// - 204 / 404 → [`FetchOutcome::NotFound`]
    /// - other non-success → [`FetchOutcome::Degraded`]
    /// - success → decoded [`FetchOutcome::Found`], or [`UpstreamError::Decode`]
    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn search(
        &self,
        query: &AddressQuery,
    ) -> std::result::Result<FetchOutcome, UpstreamError> {
        let url = self.search_url(query);

        let (attempt, attempts) = self
            .config
            .retry
            .execute(
                || self.http_client.get(&url).send(),
                |attempt: &reqwest::Result<reqwest::Response>| match attempt {
                    Ok(response) => {
                        let retryable = RetryPolicy::is_retryable_status(response.status());
                        if retryable {
                            debug!(status = response.status().as_u16(), "Transient upstream status");
                        }
                        retryable
                    }
                    Err(e) => {
                        let retryable = RetryPolicy::is_retryable_error(e);
                        debug!(error = %e, retryable, "Upstream request failed");
                        retryable
                    }
                },
            )
            .await;

        let response = attempt.map_err(|e| UpstreamError::Transient {
            attempts,
            reason: e.to_string(),
        })?;

        self.classify(response, attempts).await
    }

    async fn classify(
        &self,
        response: reqwest::Response,
        attempts: u32,
    ) -> std::result::Result<FetchOutcome, UpstreamError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::Throttled { attempts });
        }

        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            info!(status = status.as_u16(), "Upstream found no address");
            return Ok(FetchOutcome::NotFound);
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), attempts, "Upstream answered without success");
            return Ok(FetchOutcome::Degraded {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| UpstreamError::Transient {
            attempts,
            reason: format!("failed to read response body: {}", e),
        })?;

        let results = decode_results(&body)?;
        debug!(count = results.len(), attempts, "Decoded upstream response");
        Ok(FetchOutcome::Found(results))
    }
}

/// Decodes a success body. A JSON `null` is an empty list.
fn decode_results(body: &[u8]) -> std::result::Result<Vec<AddressResult>, UpstreamError> {
    serde_json::from_slice::<Option<Vec<AddressResult>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            warn!(error = %e, "Upstream body is not an address list");
            UpstreamError::Decode(e.to_string())
        })
}

#[async_trait]
impl AddressSource for ViaCepClient {
    async fn fetch(
        &self,
        query: &AddressQuery,
    ) -> std::result::Result<FetchOutcome, UpstreamError> {
        self.search(query).await
    }
}
