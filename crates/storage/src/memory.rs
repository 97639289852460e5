//! In-memory record store.
//!
//! Holds runs in a `Vec` and answers the same three queries as the SQLite
//! store. Every query is counted, and detail fetches can be made to fail
//! for chosen ids, so session tests can observe store traffic.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use runviewer_core::{Catalog, Error, RecordStore, Result, RunDetail, RunId, RunSummary};

use crate::record::RunRecord;

/// Record store backed by a vector of runs.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Vec<RunRecord>,
    failing: HashSet<RunId>,
    fail_queries: bool,
    queries: AtomicUsize,
    fetches: AtomicUsize,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the given runs.
    pub fn with_records(records: impl IntoIterator<Item = RunRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Add a run, keeping runs ordered by id.
    pub fn insert(&mut self, record: RunRecord) {
        let pos = self
            .records
            .partition_point(|r| r.run_id < record.run_id);
        self.records.insert(pos, record);
    }

    /// Make `fetch_detail(id)` fail with a query failure.
    pub fn fail_detail_for(mut self, id: RunId) -> Self {
        self.failing.insert(id);
        self
    }

    /// Make every search query fail.
    pub fn fail_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    /// Number of search queries (exact or window) served.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Number of detail fetches served, including misses.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn summaries<F>(&self, pred: F) -> Result<Vec<RunSummary>>
    where
        F: Fn(&RunRecord) -> bool,
    {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries {
            return Err(Error::QueryFailure("injected search failure".into()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.to_summary(Catalog::builtin()))
            .collect())
    }
}

impl RecordStore for MemoryRecordStore {
    fn find_by_exact_time(&self, time: &str) -> Result<Vec<RunSummary>> {
        self.summaries(|r| r.final_time_display == time)
    }

    fn find_by_frame_range(&self, min: u64, max: u64) -> Result<Vec<RunSummary>> {
        self.summaries(|r| (min..=max).contains(&r.final_time_frames))
    }

    fn fetch_detail(&self, id: RunId) -> Result<RunDetail> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&id) {
            return Err(Error::QueryFailure(format!("injected failure for run {}", id)));
        }
        self.records
            .iter()
            .find(|r| r.run_id == id)
            .map(|r| r.to_detail(Catalog::builtin()))
            .ok_or(Error::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryRecordStore {
        MemoryRecordStore::with_records(vec![
            RunRecord::new(5, "01:00.000").unwrap(),
            RunRecord::new(2, "01:00.000").unwrap(),
            RunRecord::new(9, "01:03.000").unwrap(),
        ])
    }

    #[test]
    fn test_results_ordered_by_id() {
        let ids: Vec<_> = store()
            .find_by_exact_time("01:00.000")
            .unwrap()
            .into_iter()
            .map(|r| r.run_id)
            .collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_frame_range_bounds_inclusive() {
        let store = store();
        // 01:00.000 = 1800, 01:03.000 = 1890
        assert_eq!(store.find_by_frame_range(1800, 1890).unwrap().len(), 3);
        assert_eq!(store.find_by_frame_range(1801, 1889).unwrap().len(), 0);
        assert_eq!(store.query_count(), 2);
    }

    #[test]
    fn test_fetch_detail_and_failures() {
        let store = store().fail_detail_for(9);
        assert_eq!(store.fetch_detail(5).unwrap().run_id(), 5);
        assert!(store.fetch_detail(6).unwrap_err().is_not_found());
        assert!(matches!(store.fetch_detail(9), Err(Error::QueryFailure(_))));
        assert_eq!(store.fetch_count(), 3);
    }

    #[test]
    fn test_query_failure_injection() {
        let store = store().fail_queries();
        assert!(matches!(
            store.find_by_exact_time("01:00.000"),
            Err(Error::QueryFailure(_))
        ));
        assert_eq!(store.query_count(), 1);
    }
}
