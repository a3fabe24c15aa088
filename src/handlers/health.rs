use axum::{Json, response::IntoResponse};

/// Liveness check.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
