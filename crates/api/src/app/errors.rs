use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use axisphere_core::DomainError;
use axisphere_render::ExportError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Integration(msg) => json_error(StatusCode::BAD_GATEWAY, "integration_error", msg),
        DomainError::Export(msg) => json_error(StatusCode::BAD_GATEWAY, "export_error", msg),
        DomainError::Configuration(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "not_configured", msg)
        }
    }
}

pub fn export_error_to_response(err: ExportError) -> axum::response::Response {
    json_error(StatusCode::BAD_GATEWAY, "export_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
