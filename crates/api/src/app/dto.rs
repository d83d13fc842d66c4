use chrono::NaiveDate;
use serde::Serialize;

use axisphere_catalog::{Package, PackagePrice};
use axisphere_core::Money;

/// Catalog entry as shown on the pricing page and the admin package picker.
#[derive(Debug, Clone, Serialize)]
pub struct PackageDto {
    pub id: Package,
    pub name: &'static str,
    pub price: PackagePrice,
    pub price_display: String,
    pub features: &'static [&'static str],
}

pub fn package_to_dto(package: Package) -> PackageDto {
    let price = package.price();
    let price_display = match price {
        PackagePrice::Fixed(amount) => amount.to_string(),
        PackagePrice::ContactUs => "Contact us".to_string(),
    };
    PackageDto {
        id: package,
        name: package.display_name(),
        price,
        price_display,
        features: package.features(),
    }
}

/// Prefill for a fresh admin invoice form.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePrefill {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub package: PackageDto,
    pub amount: Money,
}
