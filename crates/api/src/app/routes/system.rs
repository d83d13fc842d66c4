use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Smoke-test endpoint; the message is overridable for deploy checks.
pub async fn ping() -> impl IntoResponse {
    let message = std::env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string());
    Json(serde_json::json!({ "message": message }))
}
