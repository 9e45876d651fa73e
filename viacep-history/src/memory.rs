//! In-memory history log.
//!
//! Thread-safe FIFO storage suitable for a single-process deployment.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, instrument};

use viacep_core::constants::{DEFAULT_RECENT, HISTORY_CAPACITY};
use viacep_core::types::{AddressQuery, HistoryRecord};

/// Bounded query history.
///
/// # Ordering
///
/// Records are kept oldest first. [`list_recent`](Self::list_recent)
/// returns the newest slice in that same order.
///
/// # Thread Safety
///
/// Eviction and append happen under one write lock, so concurrent
/// [`record`](Self::record) calls never lose an entry and never push the
/// log past its capacity.
#[derive(Debug)]
pub struct HistoryLog {
    /// Records, oldest at the front
    records: RwLock<VecDeque<HistoryRecord>>,
    /// Maximum number of records kept
    capacity: usize,
    /// Records ever appended
    total_recorded: AtomicU64,
    /// Records dropped to stay within capacity
    evicted: AtomicU64,
}

impl HistoryLog {
    /// Creates an empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Creates an empty log holding at most `capacity` records.
    ///
    /// A capacity of zero is raised to one. Storage grows on demand, so a
    /// large bound costs nothing until it fills.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::new()),
            capacity,
            total_recorded: AtomicU64::new(0),
            evicted: AtomicU64::new(0),
        }
    }

    /// Appends a record for `query`, evicting the oldest one if full.
    #[instrument(skip(self, query), fields(query = %query))]
    pub fn record(&self, query: &AddressQuery) {
        let record = HistoryRecord::capture(query);

        let mut records = self.records.write();
        if records.len() >= self.capacity {
            records.pop_front();
            self.evicted.fetch_add(1, Ordering::Relaxed);
        }
        records.push_back(record);
        self.total_recorded.fetch_add(1, Ordering::Relaxed);

        debug!(len = records.len(), "Recorded query");
    }

    /// Returns the `n` most recent records, oldest to newest.
    ///
    /// Returns fewer when the log holds less; never pads.
    pub fn list_recent(&self, n: usize) -> Vec<HistoryRecord> {
        let records = self.records.read();
        let skip = records.len().saturating_sub(n);
        records.iter().skip(skip).cloned().collect()
    }

    /// Returns the [`DEFAULT_RECENT`] most recent records.
    pub fn list_default(&self) -> Vec<HistoryRecord> {
        self.list_recent(DEFAULT_RECENT)
    }

    /// Returns every record, oldest first.
    pub fn all_records(&self) -> Vec<HistoryRecord> {
        self.records.read().iter().cloned().collect()
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns the maximum number of records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every record. Counters are kept.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Returns the current statistics.
    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            len: self.len(),
            capacity: self.capacity,
            total_recorded: self.total_recorded.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
        }
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// History log statistics.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryStats {
    /// Records currently held
    pub len: usize,
    /// Maximum records held
    pub capacity: usize,
    /// Records ever appended
    pub total_recorded: u64,
    /// Records evicted to respect capacity
    pub evicted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(i: usize) -> AddressQuery {
        AddressQuery::new("SP", "Sao Paulo", format!("Rua {i}"))
    }

    #[test]
    fn test_record_and_list() {
        let log = HistoryLog::new();
        log.record(&query(1));
        log.record(&query(2));

        let recent = log.list_recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].street, "Rua 1");
        assert_eq!(recent[1].street, "Rua 2");
    }

    #[test]
    fn test_list_recent_without_padding() {
        let log = HistoryLog::new();
        for i in 0..3 {
            log.record(&query(i));
        }
        assert_eq!(log.list_default().len(), 3);
        assert!(HistoryLog::new().list_default().is_empty());
    }

    #[test]
    fn test_list_recent_returns_newest_in_insertion_order() {
        let log = HistoryLog::new();
        for i in 0..25 {
            log.record(&query(i));
        }

        let recent = log.list_recent(10);
        let streets: Vec<_> = recent.iter().map(|r| r.street.as_str()).collect();
        let expected: Vec<String> = (15..25).map(|i| format!("Rua {i}")).collect();
        assert_eq!(streets, expected);
    }

    #[test]
    fn test_list_does_not_mutate() {
        let log = HistoryLog::new();
        log.record(&query(1));
        let _ = log.list_recent(10);
        let _ = log.list_recent(10);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_bound_evicts_oldest_first() {
        let log = HistoryLog::new();
        for i in 0..1001 {
            log.record(&query(i));
        }

        assert_eq!(log.len(), 1000);
        let all = log.all_records();
        assert_eq!(all.first().unwrap().street, "Rua 1");
        assert_eq!(all.last().unwrap().street, "Rua 1000");

        let stats = log.stats();
        assert_eq!(stats.total_recorded, 1001);
        assert_eq!(stats.evicted, 1);
    }

    #[test]
    fn test_duplicate_queries_are_recorded() {
        let log = HistoryLog::new();
        log.record(&query(7));
        log.record(&query(7));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let log = HistoryLog::with_capacity(0);
        log.record(&query(1));
        log.record(&query(2));
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.list_recent(10)[0].street, "Rua 2");
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let log = HistoryLog::with_capacity(usize::MAX);
        assert_eq!(log.capacity(), usize::MAX);

        log.record(&query(1));
        log.record(&query(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.stats().evicted, 0);
    }

    #[test]
    fn test_clear() {
        let log = HistoryLog::new();
        log.record(&query(1));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.stats().total_recorded, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_record() {
        use std::sync::Arc;
        use tokio::task::JoinSet;

        let log = Arc::new(HistoryLog::with_capacity(150));
        let mut tasks = JoinSet::new();

        // 200 concurrent records into a 150-slot log
        for i in 0..200 {
            let log = log.clone();
            tasks.spawn(async move { log.record(&query(i)) });
        }

        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        let stats = log.stats();
        assert_eq!(stats.len, 150);
        assert_eq!(stats.total_recorded, 200);
        assert_eq!(stats.evicted, 50);
    }
}
