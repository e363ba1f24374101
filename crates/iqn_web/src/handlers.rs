use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::AppState;

/// Generic localized error body; detail stays in the server log.
const FETCH_ERROR_MESSAGE: &str = "שגיאה באיסוף החדשות";

pub async fn news(State(state): State<Arc<AppState>>) -> Response {
    match state.aggregator.collect().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!("news collection failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
