//! # ViaCEP History
//!
//! Bounded, insertion-ordered log of the queries the gateway has answered.
//!
//! One log lives for the whole process. It holds at most
//! [`HISTORY_CAPACITY`](viacep_core::constants::HISTORY_CAPACITY) records by
//! default and evicts the oldest first.
//!
//! ## Example
//!
//! ```rust
//! use viacep_core::AddressQuery;
//! use viacep_history::HistoryLog;
//!
//! let log = HistoryLog::new();
//! log.record(&AddressQuery::new("SP", "Sao Paulo", "Avenida Paulista"));
//!
//! let recent = log.list_recent(10);
//! assert_eq!(recent.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod memory;

pub use memory::{HistoryLog, HistoryStats};
