//! The invoice document model and its pure assembly function.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use axisphere_catalog::Package;
use axisphere_core::{DomainError, DomainResult, Money};

use crate::calculator::{self, DEFAULT_DUE_DAYS, DEFAULT_TAX_RATE_BP};

/// One billable row on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: u32,
    pub rate: Money,
    /// Always `quantity × rate`; recomputed on construction, never mutated
    /// independently.
    pub amount: Money,
}

impl InvoiceLineItem {
    pub fn new(description: impl Into<String>, quantity: u32, rate: Money) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "line item quantity must be positive",
            ));
        }
        let amount = rate
            .times(quantity)
            .ok_or_else(|| DomainError::validation("line item amount overflows"))?;
        Ok(Self {
            description: description.into(),
            quantity,
            rate,
            amount,
        })
    }
}

/// Bill-to details. Name and email are mandatory; the rest is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
}

/// Whether a full-scope invoice bills the package one-off or monthly.
///
/// The public invoice page sells subscriptions; the admin tool issues
/// one-off package invoices. An explicit custom scope overrides either label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingKind {
    FullPackage,
    MonthlySubscription,
}

/// Everything a form submission supplies to build one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub package: Package,
    pub client: ClientDetails,
    /// Charged amount. May differ from the catalog price — negotiated
    /// pricing is an intentional allowance and is never validated against
    /// the catalog.
    pub charged: Money,
    pub billing: BillingKind,
    #[serde(default)]
    pub notes: Option<String>,
    /// Explicitly chosen feature subset; empty means the full package.
    /// Order is preserved on the scope appendix.
    #[serde(default)]
    pub selected_scope: Vec<String>,
}

/// A fully computed invoice.
///
/// Created transiently per submission and never persisted; there are no
/// update operations, a new submission builds a fresh document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub package: Package,
    pub package_price: Money,
    pub client: ClientDetails,
    pub items: Vec<InvoiceLineItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub notes: Option<String>,
    pub selected_scope: Vec<String>,
}

/// Line-item label for a package and scope selection.
///
/// A proper subset of the feature list reads `"… - Custom Scope (k features)"`;
/// an empty selection or the complete feature list reads `"… - Full Package"`
/// (or `"… - Monthly Subscription"` for subscription billing).
pub fn line_description(package: Package, billing: BillingKind, selected_scope: &[String]) -> String {
    let name = package.display_name();
    let total = package.features().len();
    if !selected_scope.is_empty() && selected_scope.len() < total {
        format!("{name} - Custom Scope ({} features)", selected_scope.len())
    } else {
        match billing {
            BillingKind::FullPackage => format!("{name} - Full Package"),
            BillingKind::MonthlySubscription => format!("{name} - Monthly Subscription"),
        }
    }
}

/// Assemble an [`InvoiceDocument`] for a given invoice date and number.
///
/// Pure and side-effect-free: the admin form calls this on every keystroke
/// to recompute the live preview, so it must stay that way.
pub fn assemble_at(
    request: &InvoiceRequest,
    invoice_date: NaiveDate,
    invoice_number: String,
) -> DomainResult<InvoiceDocument> {
    if request.client.name.trim().is_empty() {
        return Err(DomainError::validation("client name is required"));
    }
    if request.client.email.trim().is_empty() {
        return Err(DomainError::validation("client email is required"));
    }
    let mut seen = HashSet::new();
    for feature in &request.selected_scope {
        if !request.package.features().contains(&feature.as_str()) {
            return Err(DomainError::validation(format!(
                "\"{feature}\" is not a feature of {}",
                request.package.display_name()
            )));
        }
        // The scope is an ordered set; a repeated entry would inflate the
        // custom-scope count and duplicate appendix lines.
        if !seen.insert(feature.as_str()) {
            return Err(DomainError::validation(format!(
                "\"{feature}\" is selected more than once"
            )));
        }
    }

    let description = line_description(request.package, request.billing, &request.selected_scope);
    let item = InvoiceLineItem::new(description, 1, request.charged)?;
    let amounts = calculator::calculate_amounts(request.charged, DEFAULT_TAX_RATE_BP);

    Ok(InvoiceDocument {
        invoice_number,
        invoice_date,
        due_date: calculator::due_date_after(invoice_date, DEFAULT_DUE_DAYS),
        package: request.package,
        package_price: request.charged,
        client: request.client.clone(),
        items: vec![item],
        subtotal: amounts.subtotal,
        tax: amounts.tax,
        total: amounts.total,
        notes: request.notes.clone().filter(|n| !n.trim().is_empty()),
        selected_scope: request.selected_scope.clone(),
    })
}

/// Assemble a document dated today with a freshly generated invoice number.
pub fn assemble(request: &InvoiceRequest) -> DomainResult<InvoiceDocument> {
    let today = chrono::Local::now().date_naive();
    assemble_at(request, today, calculator::generate_invoice_number())
}
