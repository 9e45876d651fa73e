//! History records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AddressQuery;

/// A query as it was issued, captured by the history log.
///
/// Records are immutable once created; they say what was asked, not what
/// was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// State code as sent by the caller
    pub state: String,
    /// City as sent by the caller
    pub city: String,
    /// Street as sent by the caller
    pub street: String,
    /// When the query was recorded
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Captures a query with the current time.
    pub fn capture(query: &AddressQuery) -> Self {
        Self {
            state: query.state.clone(),
            city: query.city.clone(),
            street: query.street.clone(),
            recorded_at: Utc::now(),
        }
    }
}
