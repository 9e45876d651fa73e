//! HTTP client for the ViaCEP address search API.
//!
//! Builds the `/ws/{state}/{city}/{street}/json` request, retries transient
//! failures with exponential backoff, and classifies the final response.

mod client;
mod retry;

pub use client::{ClientConfig, ViaCepClient};
pub use retry::RetryPolicy;
