//! `axisphere-invoicing` — invoice computation and the document model.
//!
//! Everything here is pure and synchronous: the calculator derives numbers
//! and identifiers, and `assemble_at` turns form input into a transient
//! `InvoiceDocument`. Documents are never persisted; every call builds a
//! fresh one, which is what lets the admin form recompute the preview on
//! each keystroke.

pub mod calculator;
pub mod document;

pub use calculator::{
    Amounts, DEFAULT_DUE_DAYS, DEFAULT_TAX_RATE_BP, calculate_amounts, due_date_after,
    format_invoice_number, format_long_date, generate_invoice_number,
};
pub use document::{
    BillingKind, ClientDetails, InvoiceDocument, InvoiceLineItem, InvoiceRequest, assemble,
    assemble_at, line_description,
};
