// src/lib.rs

pub mod api;
pub mod classifier;
pub mod config;
pub mod history;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use api::{predict_account, predict_text, FlowError};
pub use classifier::SentimentClassifier;
pub use config::Config;
pub use history::HistoryStore;
pub use types::{Category, HistoryRecord, SentimentDistribution};
