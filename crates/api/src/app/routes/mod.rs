use axum::{Router, routing::get};

pub mod admin;
pub mod contact;
pub mod invoices;
pub mod packages;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/ping", get(system::ping))
        .nest("/contact", contact::router())
        .nest("/packages", packages::router())
        .nest("/invoices", invoices::router())
        .nest("/admin", admin::router())
}
