use twitpol_dashboard::api::types::{PredictAccountRequest, PredictTextRequest, ResultSource};
use twitpol_dashboard::api::{predict_account, predict_text, FlowError};
use twitpol_dashboard::classifier::MockClassifier;
use twitpol_dashboard::history::MockStore;
use twitpol_dashboard::types::{Category, HistoryRecord, SentimentDistribution};

use serde_json::json;

#[tokio::test]
async fn test_unknown_account_classified_and_appended() {
    // "alice" has no history: one classifier call, one append, left wins
    let classifier =
        MockClassifier::new().with_account_result("alice", SentimentDistribution::new(2, 5, 1));
    let store = MockStore::new();

    let request = PredictAccountRequest {
        username: "alice".to_string(),
    };
    let response = predict_account(request, &classifier, &store).await.unwrap();

    assert_eq!(response.source, ResultSource::Classifier);
    assert_eq!(response.dominant, Category::Left);
    assert_eq!(response.distribution, SentimentDistribution::new(2, 5, 1));
    assert_eq!(response.chart.x, vec!["neutral", "left", "right"]);
    assert_eq!(response.chart.y, vec![2, 5, 1]);

    assert_eq!(classifier.account_calls(), 1);
    assert_eq!(
        store.rows(),
        vec![HistoryRecord::new("alice", SentimentDistribution::new(2, 5, 1))]
    );
}

#[tokio::test]
async fn test_known_account_served_from_history() {
    // "bob" already has a row: classifier never called, nothing written
    let classifier = MockClassifier::new();
    let store =
        MockStore::new().with_row(HistoryRecord::new("bob", SentimentDistribution::new(1, 1, 9)));

    let request = PredictAccountRequest {
        username: "bob".to_string(),
    };
    let response = predict_account(request, &classifier, &store).await.unwrap();

    assert_eq!(response.source, ResultSource::History);
    assert_eq!(response.dominant, Category::Right);
    assert_eq!(response.rows.len(), 1);

    assert_eq!(classifier.account_calls(), 0);
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn test_classify_happens_before_append() {
    // A classifier failure must leave the store untouched
    let classifier = MockClassifier::new().with_failure("alice");
    let store = MockStore::new();

    let request = PredictAccountRequest {
        username: "alice".to_string(),
    };
    let err = predict_account(request, &classifier, &store)
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::AccountClassification(_)));
    assert_eq!(classifier.account_calls(), 1);
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn test_no_deduplication_across_repeated_lookups() {
    // Two lookups before any write lands: two classifier calls and
    // two rows, by design
    let classifier =
        MockClassifier::new().with_account_result("eve", SentimentDistribution::new(3, 2, 2));

    // First lookup against an empty store
    let store = MockStore::new();
    let request = PredictAccountRequest {
        username: "eve".to_string(),
    };
    predict_account(request, &classifier, &store).await.unwrap();

    // Simulate a second dashboard instance whose query raced the
    // first write: its store view was still empty
    let racing_store = MockStore::new();
    let request = PredictAccountRequest {
        username: "eve".to_string(),
    };
    predict_account(request, &classifier, &racing_store)
        .await
        .unwrap();

    assert_eq!(classifier.account_calls(), 2);
    assert_eq!(store.rows().len(), 1);
    assert_eq!(racing_store.rows().len(), 1);
}

#[tokio::test]
async fn test_tweet_prediction_passthrough() {
    let raw = json!({"neu": 1, "dem": 0, "rep": 2});
    let classifier = MockClassifier::new().with_text_result("great policy today", raw.clone());

    let request = PredictTextRequest {
        tweet: "great policy today".to_string(),
    };
    let response = predict_text(request, &classifier).await.unwrap();

    assert_eq!(response.prediction, raw);
    assert_eq!(classifier.text_calls(), 1);
}

#[tokio::test]
async fn test_tweet_prediction_failure_shows_error_only() {
    let classifier = MockClassifier::new().with_failure("great policy today");

    let request = PredictTextRequest {
        tweet: "great policy today".to_string(),
    };
    let err = predict_text(request, &classifier).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error predicting tweet: classifier returned HTTP 500"
    );
}

#[tokio::test]
async fn test_history_rows_rendered_without_aggregation() {
    let store = MockStore::new()
        .with_row(HistoryRecord::new("frank", SentimentDistribution::new(4, 0, 1)))
        .with_row(HistoryRecord::new("frank", SentimentDistribution::new(0, 9, 0)))
        .with_row(HistoryRecord::new("grace", SentimentDistribution::new(7, 7, 7)));
    let classifier = MockClassifier::new();

    let request = PredictAccountRequest {
        username: "frank".to_string(),
    };
    let response = predict_account(request, &classifier, &store).await.unwrap();

    // Only frank's rows, in store order, and the first one drives the
    // dominant category
    assert_eq!(response.rows.len(), 2);
    assert_eq!(response.rows[0].distribution, SentimentDistribution::new(4, 0, 1));
    assert_eq!(response.dominant, Category::Neutral);
}
