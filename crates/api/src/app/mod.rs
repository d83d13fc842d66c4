//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: hosted-service wiring (contact store, email, admin auth)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response shapes for catalog and invoice prefill
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use axisphere_infra::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full application (public entrypoint used by `main.rs`).
pub async fn build_app(config: &AppConfig) -> Router {
    let services = Arc::new(services::AppServices::from_config(config).await);
    build_router(services, &config.static_dir)
}

/// Router over already-wired services; tests call this with in-memory ones.
///
/// `/health` and `/api/*` take precedence; everything else serves the built
/// site, with unknown paths falling back to `index.html` so client-side
/// routes resolve.
pub fn build_router(services: Arc<services::AppServices>, static_dir: &str) -> Router {
    let index = ServeFile::new(format!("{static_dir}/index.html"));
    let site = ServeDir::new(static_dir).not_found_service(index);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router().layer(Extension(services)))
        .fallback_service(site)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
