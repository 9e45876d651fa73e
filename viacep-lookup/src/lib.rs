//! # ViaCEP Lookup
//!
//! Answers address queries from the result cache when possible, otherwise
//! from the upstream ViaCEP service, and records every answered query in
//! the history log.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod lookup;

pub use lookup::{AddressLookup, LookupConfig, LookupResult};
pub use viacep_cache::CacheStats;
pub use viacep_client::{ClientConfig, RetryPolicy, ViaCepClient};
pub use viacep_history::{HistoryLog, HistoryStats};
