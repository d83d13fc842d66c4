use axum::{Json, Router, response::IntoResponse, routing::get};

use axisphere_catalog::Package;

use crate::app::dto;

pub fn router() -> Router {
    Router::new().route("/", get(list_packages))
}

pub async fn list_packages() -> impl IntoResponse {
    let packages: Vec<dto::PackageDto> = Package::ALL.into_iter().map(dto::package_to_dto).collect();
    Json(packages)
}
