//! Domain types for the gateway.
//!
//! - [`AddressQuery`]: The (state, city, street) tuple a caller asks about
//! - [`CacheKey`]: Case-normalized key derived from a query
//! - [`AddressResult`]: One address record returned by upstream
//! - [`FetchOutcome`]: Classified answer of a single upstream call
//! - [`HistoryRecord`]: A query as captured by the history log

mod query;
mod address;
mod outcome;
mod history;

pub use query::*;
pub use address::*;
pub use outcome::*;
pub use history::*;
