//! Per-path lock table
//!
//! The namespace entities carry no internal locking: the host process owns
//! the critical-section boundary so it can batch a lookup with the mutation
//! that follows it. This table is the companion primitive — one mutex per
//! normalized path, handed out on demand.

use crate::path;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Lazily grown table of per-path mutexes.
#[derive(Default)]
pub struct PathLocks {
    table: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex guarding `raw_path`.
    ///
    /// The path is normalized first, so spellings like `/a/` and `a`
    /// serialize against each other. Callers hold the returned lock for the
    /// whole lookup-then-mutate sequence.
    pub fn acquire(&self, raw_path: &str) -> Arc<Mutex<()>> {
        let key = path::normalize(raw_path);
        self.table.lock().entry(key).or_default().clone()
    }

    /// Drop table entries no caller currently holds.
    pub fn prune(&self) {
        self.table.lock().retain(|_, lock| Arc::strong_count(lock) > 1);
    }
}
