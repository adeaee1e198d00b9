// src/history/mocks.rs

use std::sync::Mutex;

use async_trait::async_trait;

use super::{HistoryStore, StoreError};
use crate::types::HistoryRecord;

/// In-memory store double. Rows live in append order; appends are
/// recorded so tests can assert exactly what was written and when.
pub struct MockStore {
    rows: Mutex<Vec<HistoryRecord>>,
    fail_queries: bool,
    fail_appends: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_queries: false,
            fail_appends: false,
        }
    }

    pub fn with_row(self, record: HistoryRecord) -> Self {
        self.rows.lock().unwrap().push(record);
        self
    }

    pub fn with_failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn with_failing_appends(mut self) -> Self {
        self.fail_appends = true;
        self
    }

    /// Every row currently in the store, in append order.
    pub fn rows(&self) -> Vec<HistoryRecord> {
        self.rows.lock().unwrap().clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MockStore {
    async fn find_by_account(&self, account: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        if self.fail_queries {
            return Err(StoreError::Http(503));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.account == account)
            .cloned()
            .collect())
    }

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        if self.fail_appends {
            return Err(StoreError::Http(503));
        }

        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }
}
