// src/classifier/remote.rs

use async_trait::async_trait;
use serde_json::Value;

use super::{ClassifierError, SentimentClassifier};
use crate::types::SentimentDistribution;

/// Key spellings observed across classifier revisions, per semantic
/// role. Matched case-insensitively; the first key in the response
/// that matches a role supplies that role's count.
const NEUTRAL_KEYS: &[&str] = &["neutral", "neu", "neuteral"];
const LEFT_KEYS: &[&str] = &["left", "dem", "democrat", "democrats"];
const RIGHT_KEYS: &[&str] = &["right", "rep", "republican", "republicans"];

pub struct RemoteClassifier {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteClassifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json(&self, path: &str, param: (&str, &str)) -> Result<Value, ClassifierError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[param])
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%url, status = status.as_u16(), %body, "classifier request failed");
            return Err(ClassifierError::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        tracing::debug!(%url, response = %text, "classifier response");

        serde_json::from_str(&text).map_err(|e| ClassifierError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SentimentClassifier for RemoteClassifier {
    async fn predict_text(&self, tweet: &str) -> Result<Value, ClassifierError> {
        self.get_json("/predict-text", ("tweet", tweet)).await
    }

    async fn predict_account(
        &self,
        username: &str,
    ) -> Result<SentimentDistribution, ClassifierError> {
        let body = self.get_json("/predict-user", ("username", username)).await?;
        normalize_account_response(&body)
    }
}

/// Translate a `/predict-user` response body into the canonical
/// distribution. Key spellings have drifted between service revisions,
/// so each count is located by semantic role rather than a fixed name.
pub fn normalize_account_response(body: &Value) -> Result<SentimentDistribution, ClassifierError> {
    let object = body
        .as_object()
        .ok_or_else(|| ClassifierError::InvalidResponse("expected a JSON object".to_string()))?;

    let neutral = count_for_role(object, NEUTRAL_KEYS, "neutral")?;
    let left = count_for_role(object, LEFT_KEYS, "left")?;
    let right = count_for_role(object, RIGHT_KEYS, "right")?;

    Ok(SentimentDistribution::new(neutral, left, right))
}

fn count_for_role(
    object: &serde_json::Map<String, Value>,
    aliases: &[&str],
    role: &str,
) -> Result<u64, ClassifierError> {
    for (key, value) in object {
        let key = key.to_lowercase();
        if aliases.iter().any(|alias| *alias == key) {
            return value.as_u64().ok_or_else(|| {
                ClassifierError::InvalidResponse(format!(
                    "count for '{}' is not a non-negative integer",
                    role
                ))
            });
        }
    }
    Err(ClassifierError::InvalidResponse(format!(
        "no count field found for '{}'",
        role
    )))
}
