use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use axisphere_auth::SessionToken;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/session", get(session))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    match services.admin.login(&body.email, &body.password) {
        Some(token) => {
            let session = services.admin.session(&token);
            Json(serde_json::json!({
                "token": token,
                "session": session,
            }))
            .into_response()
        }
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "email or password did not match",
        ),
    }
}

pub async fn session(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    match bearer_token(&headers).and_then(|token| services.admin.session(&token)) {
        Some(session) => Json(session).into_response(),
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid session token",
        ),
    }
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Some(token) = bearer_token(&headers) {
        services.admin.logout(&token);
    }
    StatusCode::NO_CONTENT.into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Some(SessionToken::from(token))
}
