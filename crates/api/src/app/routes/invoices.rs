use axum::{
    Json, Router,
    extract::Query,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;

use axisphere_catalog::Package;
use axisphere_invoicing::{
    DEFAULT_DUE_DAYS, InvoiceRequest, assemble, due_date_after, generate_invoice_number,
};
use axisphere_render::{InvoiceView, export_pdf, print_html};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/new", get(new_invoice))
        .route("/preview", post(preview_invoice))
        .route("/print", post(print_invoice))
        .route("/export", post(export_invoice))
}

#[derive(Debug, Default, Deserialize)]
pub struct NewInvoiceParams {
    pub package: Option<String>,
}

/// Prefill a fresh invoice form: generated number, today's dates, and the
/// requested package. An unrecognized package name falls back to the
/// starter package rather than erroring.
pub async fn new_invoice(Query(params): Query<NewInvoiceParams>) -> impl IntoResponse {
    let package = params
        .package
        .as_deref()
        .and_then(Package::from_display_name)
        .unwrap_or_default();

    let invoice_date = chrono::Local::now().date_naive();
    Json(dto::InvoicePrefill {
        invoice_number: generate_invoice_number(),
        invoice_date,
        due_date: due_date_after(invoice_date, DEFAULT_DUE_DAYS),
        package: dto::package_to_dto(package),
        amount: package.default_charge(),
    })
}

/// Recompute the live preview: the full document plus its formatted view.
pub async fn preview_invoice(Json(request): Json<InvoiceRequest>) -> axum::response::Response {
    let document = match assemble(&request) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let view = InvoiceView::from_document(&document);
    Json(serde_json::json!({
        "document": document,
        "view": view,
    }))
    .into_response()
}

/// Render the standalone print page for a submission.
pub async fn print_invoice(Json(request): Json<InvoiceRequest>) -> axum::response::Response {
    let document = match assemble(&request) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match print_html(&document) {
        Ok(html) => Html(html).into_response(),
        Err(e) => errors::export_error_to_response(e),
    }
}

/// Compose and download the invoice PDF.
pub async fn export_invoice(Json(request): Json<InvoiceRequest>) -> axum::response::Response {
    let document = match assemble(&request) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match export_pdf(&document) {
        Ok(exported) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", exported.file_name),
                ),
            ],
            exported.bytes,
        )
            .into_response(),
        Err(e) => errors::export_error_to_response(e),
    }
}
