//! Shared position-keyed result cache.
//!
//! Entries are written once and read thereafter; the only mutation is a
//! single insert-if-absent, so a plain mutex-guarded map is enough. The
//! cache is caller-owned and injected, never ambient state.

use crate::assess::MoveQualityResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub struct AnalysisCache {
    entries: Mutex<HashMap<u64, Arc<Vec<MoveQualityResult>>>>,
    capacity: usize,
}

impl AnalysisCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    pub fn get(&self, position_hash: u64) -> Option<Arc<Vec<MoveQualityResult>>> {
        match self.entries.lock() {
            Ok(map) => map.get(&position_hash).cloned(),
            Err(_) => None,
        }
    }

    /// First writer wins: if the key is present the existing entry is
    /// returned untouched. A full cache refuses the insert and hands the
    /// caller's value back.
    pub fn insert_if_absent(
        &self,
        position_hash: u64,
        results: Arc<Vec<MoveQualityResult>>,
    ) -> Arc<Vec<MoveQualityResult>> {
        let Ok(mut map) = self.entries.lock() else {
            return results;
        };
        if let Some(existing) = map.get(&position_hash) {
            return Arc::clone(existing);
        }
        if map.len() >= self.capacity {
            debug!(capacity = self.capacity, "analysis cache full, entry not stored");
            return results;
        }
        map.insert(position_hash, Arc::clone(&results));
        results
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
