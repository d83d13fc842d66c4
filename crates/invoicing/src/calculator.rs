//! Pure invoice arithmetic: numbers, dates, amounts, display formatting.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use axisphere_core::Money;

/// Default payment terms: due 30 calendar days after the invoice date.
pub const DEFAULT_DUE_DAYS: i64 = 30;

/// Default tax rate in basis points (18% GST).
pub const DEFAULT_TAX_RATE_BP: u32 = 1_800;

/// Subtotal, tax, and total for one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amounts {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// `subtotal = price`, `tax = price × rate` (rounded half-up at paise
/// precision), `total = subtotal + tax`. Idempotent and exact.
pub fn calculate_amounts(price: Money, tax_rate_bp: u32) -> Amounts {
    let tax = price.tax_at(tax_rate_bp);
    Amounts {
        subtotal: price,
        tax,
        total: price.saturating_add(tax),
    }
}

/// Deterministic core of invoice-number generation: `AXI-YYYYMMDD-NNNN`.
pub fn format_invoice_number(date: NaiveDate, random: u16) -> String {
    format!("AXI-{}-{:04}", date.format("%Y%m%d"), random % 10_000)
}

/// Invoice number for today's local date with a fresh 4-digit random suffix.
///
/// Uniqueness is probabilistic (~1/10,000 collision odds per pair per day).
/// Invoices are never deduplicated or looked up by number, so collisions are
/// tolerated rather than eliminated.
pub fn generate_invoice_number() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format_invoice_number(Local::now().date_naive(), suffix)
}

/// Calendar-day addition; no timezone normalization beyond the local date.
pub fn due_date_after(invoice_date: NaiveDate, days: i64) -> NaiveDate {
    invoice_date + Duration::days(days)
}

/// Long en-IN date form, e.g. `26 August 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_price_yields_all_zero_amounts() {
        let amounts = calculate_amounts(Money::ZERO, DEFAULT_TAX_RATE_BP);
        assert_eq!(amounts.subtotal, Money::ZERO);
        assert_eq!(amounts.tax, Money::ZERO);
        assert_eq!(amounts.total, Money::ZERO);
    }

    #[test]
    fn default_rate_is_eighteen_percent() {
        let amounts = calculate_amounts(Money::from_rupees(75_000), DEFAULT_TAX_RATE_BP);
        assert_eq!(amounts.subtotal, Money::from_rupees(75_000));
        assert_eq!(amounts.tax, Money::from_rupees(13_500));
        assert_eq!(amounts.total, Money::from_rupees(88_500));
    }

    #[test]
    fn due_date_is_plain_calendar_addition() {
        let jan_first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            due_date_after(jan_first, 30),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        // Crosses a month boundary without surprises.
        let jan_15 = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(
            due_date_after(jan_15, 30),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
    }

    #[test]
    fn invoice_number_has_fixed_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_invoice_number(date, 42), "AXI-20250307-0042");
        assert_eq!(format_invoice_number(date, 9_999), "AXI-20250307-9999");
        // Out-of-range suffixes wrap rather than widening the field.
        assert_eq!(format_invoice_number(date, 10_001), "AXI-20250307-0001");
    }

    #[test]
    fn generated_numbers_match_the_pattern() {
        for _ in 0..100 {
            let number = generate_invoice_number();
            assert_matches_pattern(&number);
        }
    }

    fn assert_matches_pattern(number: &str) {
        // AXI-\d{8}-\d{4}
        let bytes = number.as_bytes();
        assert_eq!(bytes.len(), 17, "unexpected length for {number}");
        assert_eq!(&number[..4], "AXI-");
        assert!(number[4..12].bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(&number[12..13], "-");
        assert!(number[13..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn long_date_form() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_long_date(date), "1 January 2025");
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert_eq!(format_long_date(date), "26 August 2026");
    }

    proptest! {
        // total == subtotal + tax, and tax is 18% within half a paisa.
        #[test]
        fn amounts_are_consistent(paise in 0u64..1_000_000_000_000) {
            let price = Money::from_paise(paise);
            let amounts = calculate_amounts(price, DEFAULT_TAX_RATE_BP);
            prop_assert_eq!(amounts.subtotal, price);
            prop_assert_eq!(
                amounts.total,
                amounts.subtotal.saturating_add(amounts.tax)
            );
            // |tax × 10000 − subtotal × 1800| ≤ 5000 (half a paisa, scaled).
            let exact = u128::from(paise) * 1_800;
            let rounded = u128::from(amounts.tax.as_paise()) * 10_000;
            let diff = rounded.abs_diff(exact);
            prop_assert!(diff <= 5_000, "tax rounding drifted by {diff}");
        }

        #[test]
        fn amounts_are_idempotent(paise in 0u64..1_000_000_000_000) {
            let price = Money::from_paise(paise);
            let first = calculate_amounts(price, DEFAULT_TAX_RATE_BP);
            let second = calculate_amounts(price, DEFAULT_TAX_RATE_BP);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn formatted_numbers_always_match_the_pattern(
            year in 2000i32..2100,
            ordinal in 1u32..365,
            suffix in 0u16..10_000,
        ) {
            let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let number = format_invoice_number(date, suffix);
            assert_matches_pattern(&number);
        }
    }
}
