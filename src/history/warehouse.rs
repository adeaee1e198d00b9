// src/history/warehouse.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{HistoryStore, StoreError};
use crate::types::HistoryRecord;

/// JSON-over-HTTP client for the hosted tabular warehouse.
///
/// The warehouse exposes one logical table with an account column and
/// the three count columns. Queries POST an equality filter; loads
/// POST new rows in append mode. The account handle travels as a JSON
/// parameter, never spliced into a query string.
pub struct WarehouseStore {
    base_url: String,
    table: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl WarehouseStore {
    pub fn new(
        base_url: impl Into<String>,
        table: impl Into<String>,
        api_token: Option<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.into(),
            api_token,
            client: reqwest::Client::new(),
        }
    }

    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, StoreError> {
        let url = format!("{}/tables/{}{}", self.base_url, self.table, path);

        let mut request = self
            .client
            .post(&url)
            .json(&body)
            .timeout(std::time::Duration::from_secs(10));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%url, status = status.as_u16(), %body, "warehouse request failed");
            return Err(StoreError::Http(status.as_u16()));
        }

        Ok(response)
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    rows: Vec<HistoryRecord>,
}

#[derive(Debug, Serialize)]
struct LoadRequest<'a> {
    rows: [&'a HistoryRecord; 1],
}

#[async_trait]
impl HistoryStore for WarehouseStore {
    async fn find_by_account(&self, account: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let response = self
            .post_json("/query", json!({ "account": account }))
            .await?;

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        Ok(body.rows)
    }

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        let load = LoadRequest { rows: [record] };
        self.post_json("/rows", serde_json::to_value(&load).map_err(|e| {
            StoreError::InvalidResponse(e.to_string())
        })?)
        .await?;
        Ok(())
    }
}
