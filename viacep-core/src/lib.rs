//! # ViaCEP Core
//!
//! Core types, errors, and traits for the ViaCEP address-lookup gateway.
//!
//! This crate provides the foundational building blocks used by all other gateway crates:
//!
//! - **Types**: Queries, cache keys, upstream address records, history records
//! - **Errors**: The upstream failure taxonomy and the gateway error type
//! - **Constants**: Upstream endpoint, TTL, history bound, retry defaults
//! - **Traits**: The upstream seam used by the lookup orchestrator
//!
//! ## Example
//!
//! ```rust
//! use viacep_core::AddressQuery;
//!
//! let a = AddressQuery::new("sp", "Sao Paulo", "Avenida Paulista");
//! let b = AddressQuery::new("SP", "sao paulo", "avenida paulista");
//! assert_eq!(a.cache_key(), b.cache_key());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, UpstreamError, ViaCepError};
pub use traits::*;
pub use types::*;
