// src/api/predict_account.rs

use super::types::{ChartData, PredictAccountRequest, PredictAccountResponse, ResultSource};
use super::FlowError;
use crate::classifier::SentimentClassifier;
use crate::history::HistoryStore;
use crate::types::HistoryRecord;

/// Account flow: look the handle up in the history store first; only
/// on a miss call the classifier, and persist the fresh result after
/// the response is built. One linear pass per invocation, nothing
/// survives between invocations except the store.
pub async fn predict_account<C, S>(
    request: PredictAccountRequest,
    classifier: &C,
    store: &S,
) -> Result<PredictAccountResponse, FlowError>
where
    C: SentimentClassifier,
    S: HistoryStore,
{
    let username = request.username;

    let rows = store
        .find_by_account(&username)
        .await
        .map_err(FlowError::HistoryQuery)?;

    if !rows.is_empty() {
        // Cache hit: no classifier call, no write. All rows are
        // returned as-is; the dominant category comes from the first.
        tracing::info!(%username, rows = rows.len(), "history hit");

        let distribution = rows[0].distribution;
        return Ok(PredictAccountResponse {
            username,
            source: ResultSource::History,
            chart: ChartData::for_distribution(&distribution),
            dominant: distribution.dominant(),
            distribution,
            rows,
        });
    }

    // Cache miss
    tracing::info!(%username, "history miss, calling classifier");

    let distribution = classifier
        .predict_account(&username)
        .await
        .map_err(FlowError::AccountClassification)?;

    let record = HistoryRecord::new(username.clone(), distribution);
    let response = PredictAccountResponse {
        username,
        source: ResultSource::Classifier,
        chart: ChartData::for_distribution(&distribution),
        dominant: distribution.dominant(),
        distribution,
        rows: vec![record.clone()],
    };

    // Fire-and-forget append: the response above is what the user
    // gets either way. A failed write only loses the cache entry.
    if let Err(e) = store.append(&record).await {
        tracing::warn!(account = %record.account, error = %e, "history append failed");
    }

    Ok(response)
}
