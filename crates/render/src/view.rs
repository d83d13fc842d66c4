//! Structured view model and print rendering.
//!
//! The print page embeds its own stylesheet so printed output looks the same
//! regardless of the application theme the user happens to be in.

use serde::Serialize;
use tera::{Context, Tera};

use axisphere_invoicing::{InvoiceDocument, format_long_date};

use crate::ExportError;

/// Issuer identity shown in the invoice header.
pub const ISSUER_NAME: &str = "Axisphere Media Worx LLP";
pub const ISSUER_LOCATION: &str = "Bengaluru, Karnataka, India";

const PAYMENT_TERMS: &str = "Due within 30 days";
const FOOTER: &str =
    "Thank you for your business! For inquiries, contact hello@ai-marketing.studio";

/// How many catalog features the "Package Includes" digest shows in full.
const INCLUDES_DIGEST_LEN: usize = 5;

const INVOICE_TEMPLATE: &str = include_str!("../templates/invoice.html");

/// The bill-to block; blank optionals are omitted from the view.
#[derive(Debug, Clone, Serialize)]
pub struct BillTo {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}

/// One formatted line-item row.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub description: String,
    pub quantity: u32,
    pub rate: String,
    pub amount: String,
}

/// Digest of the package's catalog features shown under the totals.
#[derive(Debug, Clone, Serialize)]
pub struct PackageIncludes {
    pub headline: Vec<String>,
    pub more: usize,
}

/// Everything the on-screen and print invoice shows, pre-formatted.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceView {
    pub issuer_name: &'static str,
    pub issuer_location: &'static str,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub bill_to: BillTo,
    pub payment_terms: &'static str,
    pub items: Vec<ItemRow>,
    pub subtotal: String,
    pub tax_label: &'static str,
    pub tax: String,
    pub total: String,
    pub package_includes: Option<PackageIncludes>,
    pub notes: Option<String>,
    /// Feature-scope appendix; rendered as a second page when non-empty.
    pub scope: Vec<String>,
    pub scope_title: String,
    pub footer: &'static str,
}

impl InvoiceView {
    pub fn from_document(document: &InvoiceDocument) -> Self {
        let features = document.package.features();
        let package_includes = if features.is_empty() {
            None
        } else {
            Some(PackageIncludes {
                headline: features
                    .iter()
                    .take(INCLUDES_DIGEST_LEN)
                    .map(|f| f.to_string())
                    .collect(),
                more: features.len().saturating_sub(INCLUDES_DIGEST_LEN),
            })
        };

        Self {
            issuer_name: ISSUER_NAME,
            issuer_location: ISSUER_LOCATION,
            invoice_number: document.invoice_number.clone(),
            invoice_date: format_long_date(document.invoice_date),
            due_date: format_long_date(document.due_date),
            bill_to: BillTo {
                name: document.client.name.clone(),
                email: document.client.email.clone(),
                company: non_blank(&document.client.company),
                phone: non_blank(&document.client.phone),
            },
            payment_terms: PAYMENT_TERMS,
            items: document
                .items
                .iter()
                .map(|item| ItemRow {
                    description: item.description.clone(),
                    quantity: item.quantity,
                    rate: item.rate.to_string(),
                    amount: item.amount.to_string(),
                })
                .collect(),
            subtotal: document.subtotal.to_string(),
            tax_label: "Tax (18% GST)",
            tax: document.tax.to_string(),
            total: document.total.to_string(),
            package_includes,
            notes: document.notes.clone(),
            scope: document.selected_scope.clone(),
            scope_title: document.package.display_name().to_string(),
            footer: FOOTER,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Render the standalone print page for a document.
///
/// The stylesheet is embedded and fixed; user-provided fields are
/// HTML-escaped by the template engine.
pub fn print_html(document: &InvoiceDocument) -> Result<String, ExportError> {
    let view = InvoiceView::from_document(document);
    let context = Context::from_serialize(&view)?;
    let html = Tera::one_off(INVOICE_TEMPLATE, &context, true)?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisphere_catalog::Package;
    use axisphere_core::Money;
    use axisphere_invoicing::{BillingKind, ClientDetails, InvoiceRequest, assemble_at};
    use chrono::NaiveDate;

    fn document(scope: Vec<String>) -> InvoiceDocument {
        let request = InvoiceRequest {
            package: Package::AiGrowth,
            client: ClientDetails {
                name: "Dev & Sons <Pvt>".to_string(),
                email: "dev@example.com".to_string(),
                phone: String::new(),
                company: String::new(),
            },
            charged: Money::from_rupees(75_000),
            billing: BillingKind::FullPackage,
            notes: Some("50% advance received.".to_string()),
            selected_scope: scope,
        };
        assemble_at(
            &request,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "AXI-20250101-1234".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn view_formats_amounts_and_dates() {
        let view = InvoiceView::from_document(&document(Vec::new()));
        assert_eq!(view.invoice_number, "AXI-20250101-1234");
        assert_eq!(view.invoice_date, "1 January 2025");
        assert_eq!(view.due_date, "31 January 2025");
        assert_eq!(view.subtotal, "₹75,000.00");
        assert_eq!(view.tax, "₹13,500.00");
        assert_eq!(view.total, "₹88,500.00");
        assert!(view.bill_to.company.is_none());
        assert!(view.scope.is_empty());
    }

    #[test]
    fn includes_digest_shows_five_features_plus_remainder() {
        let view = InvoiceView::from_document(&document(Vec::new()));
        let includes = view.package_includes.unwrap();
        assert_eq!(includes.headline.len(), 5);
        assert_eq!(includes.more, Package::AiGrowth.features().len() - 5);
    }

    #[test]
    fn print_page_escapes_user_input_and_embeds_styles() {
        let html = print_html(&document(Vec::new())).unwrap();
        assert!(html.contains("Invoice AXI-20250101-1234"));
        assert!(html.contains("Dev &amp; Sons &lt;Pvt&gt;"));
        assert!(html.contains("@media print"));
        assert!(html.contains("₹88,500.00"));
        // No scope selected: no appendix page.
        assert!(!html.contains("Scope of Work"));
    }

    #[test]
    fn scope_appendix_renders_on_its_own_page() {
        let scope: Vec<String> = Package::AiGrowth.features()[..4]
            .iter()
            .map(|f| f.to_string())
            .collect();
        let html = print_html(&document(scope)).unwrap();
        assert!(html.contains("Scope of Work"));
        assert!(html.contains("page-break-before: always"));
        assert!(html.contains(Package::AiGrowth.features()[0]));
    }
}
