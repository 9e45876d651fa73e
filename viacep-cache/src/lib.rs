//! TTL cache for ViaCEP lookup results.
//!
//! In-memory key/value store with per-entry expiration and lazy
//! expiry-check-on-read.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;

pub use cache::{CacheConfig, CacheStats, ResultCache};
