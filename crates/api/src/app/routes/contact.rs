use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use axisphere_contact::ContactForm;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(submit))
}

/// Accept a contact-form submission.
///
/// The notification email goes out first, then the message is stored; the
/// two outcomes are independent and both reported. A store failure is an
/// operator problem, not the visitor's, so the submission still succeeds.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Query(metadata): Query<BTreeMap<String, String>>,
    Json(form): Json<ContactForm>,
) -> axum::response::Response {
    let message = match form.into_message(metadata) {
        Ok(m) => m,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let email = services.email.notify(&message, Utc::now()).await;

    let stored = match services.contact_store.insert(&message).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, "failed to store contact message");
            false
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "stored": stored,
            "email": email,
        })),
    )
        .into_response()
}
