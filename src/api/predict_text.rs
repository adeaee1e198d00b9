// src/api/predict_text.rs

use super::types::{PredictTextRequest, PredictTextResponse};
use super::FlowError;
use crate::classifier::SentimentClassifier;

/// Text flow: forward the tweet to the classifier and return the raw
/// response. No caching, no store access, no further processing.
pub async fn predict_text<C: SentimentClassifier>(
    request: PredictTextRequest,
    classifier: &C,
) -> Result<PredictTextResponse, FlowError> {
    let prediction = classifier
        .predict_text(&request.tweet)
        .await
        .map_err(FlowError::TextClassification)?;

    Ok(PredictTextResponse { prediction })
}
