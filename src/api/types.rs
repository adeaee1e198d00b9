// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::types::{Category, HistoryRecord, SentimentDistribution};

#[derive(Clone, Debug, Deserialize)]
pub struct PredictTextRequest {
    pub tweet: String,
}

/// The classifier's body, passed through verbatim. The text flow does
/// no normalization.
#[derive(Clone, Debug, Serialize)]
pub struct PredictTextResponse {
    pub prediction: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PredictAccountRequest {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    History,
    Classifier,
}

/// Bar-chart series for the dashboard's chart widget: x = category
/// labels in canonical order, y = the matching counts.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x: Vec<&'static str>,
    pub y: Vec<u64>,
}

impl ChartData {
    pub fn for_distribution(distribution: &SentimentDistribution) -> Self {
        Self {
            title: "Political Sentiment Distribution".to_string(),
            x: Category::ALL.iter().map(|c| c.label()).collect(),
            y: Category::ALL.iter().map(|c| distribution.count(*c)).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PredictAccountResponse {
    pub username: String,
    pub source: ResultSource,
    /// Every matching store row on a hit (rendered as returned, no
    /// deduplication); the single newly classified row on a miss.
    pub rows: Vec<HistoryRecord>,
    pub distribution: SentimentDistribution,
    pub dominant: Category,
    pub chart: ChartData,
}
