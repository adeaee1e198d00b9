// src/server.rs

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::types::{
    PredictAccountRequest, PredictAccountResponse, PredictTextRequest, PredictTextResponse,
};
use crate::api::{predict_account, predict_text, FlowError};
use crate::classifier::RemoteClassifier;
use crate::config::Config;
use crate::history::WarehouseStore;

pub struct AppState {
    pub classifier: RemoteClassifier,
    pub store: WarehouseStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: RemoteClassifier::new(config.classifier_base_url.clone()),
            store: WarehouseStore::new(
                config.warehouse_base_url.clone(),
                config.warehouse_table.clone(),
                config.warehouse_api_token.clone(),
            ),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(err: FlowError) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!(error = %err, "flow failed");
    // 4xx/5xx/transport classes are deliberately not distinguished
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

pub async fn predict_text_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictTextRequest>,
) -> Result<Json<PredictTextResponse>, (StatusCode, Json<ErrorBody>)> {
    tracing::info!("predict-text request");

    predict_text(request, &state.classifier)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn predict_account_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictAccountRequest>,
) -> Result<Json<PredictAccountResponse>, (StatusCode, Json<ErrorBody>)> {
    tracing::info!(username = %request.username, "predict-account request");

    predict_account(request, &state.classifier, &state.store)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn health_handler() -> &'static str {
    "ok"
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/predict-text", post(predict_text_handler))
        .route("/api/v1/predict-account", post(predict_account_handler))
        .route("/api/v1/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(port: u16, state: Arc<AppState>) {
    let app = router(state);

    // Bind to 0.0.0.0 so the dashboard page can reach us from outside
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!(%addr, "server listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", addr, e));

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {}", e));
}
