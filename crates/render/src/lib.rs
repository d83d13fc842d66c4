//! `axisphere-render` — the document renderer.
//!
//! Turns an [`axisphere_invoicing::InvoiceDocument`] into:
//! - a structured view model for the on-screen invoice ([`view::InvoiceView`]),
//! - a standalone print page with a fixed embedded stylesheet, independent of
//!   the application theme ([`view::print_html`]),
//! - a downloadable PDF named `{invoice_number}.pdf`, with a forced page
//!   break before the feature-scope appendix when a scope was selected
//!   ([`pdf::export_pdf`]).

pub mod pdf;
pub mod view;

use thiserror::Error;

pub use pdf::{ExportedPdf, export_pdf};
pub use view::{InvoiceView, print_html};

/// Renderer failure. Reported to the operator log channel; never fatal to
/// the caller's view, which recomputes the document from form state.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render invoice view: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to compose PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}
