// src/classifier/mod.rs

use async_trait::async_trait;

use crate::types::SentimentDistribution;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier returned HTTP {0}")]
    Http(u16),
    #[error("classifier request failed: {0}")]
    Network(String),
    #[error("classifier response invalid: {0}")]
    InvalidResponse(String),
}

/// Client for the remote sentiment-prediction service.
///
/// Text predictions come back verbatim; account predictions are
/// normalized into the canonical category schema at this boundary.
#[async_trait]
pub trait SentimentClassifier {
    async fn predict_text(&self, tweet: &str) -> Result<serde_json::Value, ClassifierError>;

    async fn predict_account(
        &self,
        username: &str,
    ) -> Result<SentimentDistribution, ClassifierError>;
}

pub mod mocks;
pub mod remote;

pub use mocks::MockClassifier;
pub use remote::RemoteClassifier;
