// src/classifier/mocks.rs

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use super::{ClassifierError, SentimentClassifier};
use crate::types::SentimentDistribution;

/// Canned classifier for tests. Counts calls per operation so tests
/// can assert that the history flow skipped or hit the classifier.
pub struct MockClassifier {
    text_results: HashMap<String, Value>,
    account_results: HashMap<String, SentimentDistribution>,
    failing_inputs: HashSet<String>,
    text_calls: AtomicUsize,
    account_calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            text_results: HashMap::new(),
            account_results: HashMap::new(),
            failing_inputs: HashSet::new(),
            text_calls: AtomicUsize::new(0),
            account_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_text_result(mut self, tweet: &str, result: Value) -> Self {
        self.text_results.insert(tweet.to_string(), result);
        self
    }

    pub fn with_account_result(mut self, username: &str, dist: SentimentDistribution) -> Self {
        self.account_results.insert(username.to_string(), dist);
        self
    }

    pub fn with_failure(mut self, input: &str) -> Self {
        self.failing_inputs.insert(input.to_string());
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn account_calls(&self) -> usize {
        self.account_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    async fn predict_text(&self, tweet: &str) -> Result<Value, ClassifierError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_inputs.contains(tweet) {
            return Err(ClassifierError::Http(500));
        }

        self.text_results
            .get(tweet)
            .cloned()
            .ok_or_else(|| ClassifierError::InvalidResponse("no canned result".to_string()))
    }

    async fn predict_account(
        &self,
        username: &str,
    ) -> Result<SentimentDistribution, ClassifierError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_inputs.contains(username) {
            return Err(ClassifierError::Http(500));
        }

        self.account_results
            .get(username)
            .copied()
            .ok_or_else(|| ClassifierError::InvalidResponse("no canned result".to_string()))
    }
}
