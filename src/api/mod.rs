// src/api/mod.rs

use crate::classifier::ClassifierError;
use crate::history::StoreError;

pub mod predict_account;
pub mod predict_text;
pub mod types;

pub use predict_account::predict_account;
pub use predict_text::predict_text;
pub use types::{
    ChartData, PredictAccountRequest, PredictAccountResponse, PredictTextRequest,
    PredictTextResponse, ResultSource,
};

/// Failure of one dashboard interaction. The message is what the user
/// sees; nothing is rendered alongside it.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Error predicting tweet: {0}")]
    TextClassification(ClassifierError),
    #[error("Error predicting user account: {0}")]
    AccountClassification(ClassifierError),
    #[error("Error querying account history: {0}")]
    HistoryQuery(StoreError),
}
