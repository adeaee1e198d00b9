// src/history/mod.rs

use async_trait::async_trait;

use crate::types::HistoryRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("history store returned HTTP {0}")]
    Http(u16),
    #[error("history store request failed: {0}")]
    Network(String),
    #[error("history store response invalid: {0}")]
    InvalidResponse(String),
}

/// Client for the hosted tabular store holding previously computed
/// account distributions. Reads are exact-match equality queries;
/// writes are strictly additive, one row per append.
#[async_trait]
pub trait HistoryStore {
    async fn find_by_account(&self, account: &str) -> Result<Vec<HistoryRecord>, StoreError>;

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError>;
}

pub mod mocks;
pub mod warehouse;

pub use mocks::MockStore;
pub use warehouse::WarehouseStore;
