/*
 * Responsibility
 * - GET /health (liveness probe)
 * - also handy for confirming which routes the middleware covers
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
