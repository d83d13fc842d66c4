//! Minor-unit money.
//!
//! All amounts are INR in paise (smallest currency unit), carried in a `u64`.
//! Tax math stays in integer arithmetic with an explicit rounding rule so the
//! same inputs always produce the same totals.

use serde::{Deserialize, Serialize};

const PAISE_PER_RUPEE: u64 = 100;

/// A non-negative INR amount in paise.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    pub const fn from_rupees(rupees: u64) -> Self {
        Self(rupees * PAISE_PER_RUPEE)
    }

    pub const fn as_paise(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Tax on this amount at `rate_bp` basis points (1800 = 18%), rounded
    /// half-up at paise precision.
    ///
    /// Rounding rule: `(paise * rate_bp + 5000) / 10000` in `u128`, so the
    /// result is exact and cannot overflow for any representable amount.
    pub fn tax_at(self, rate_bp: u32) -> Money {
        let paise = (u128::from(self.0) * u128::from(rate_bp) + 5_000) / 10_000;
        Money(paise as u64)
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// `self × quantity`; `None` on overflow.
    pub fn times(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }
}

impl core::fmt::Display for Money {
    /// en-IN currency form, e.g. `₹75,000.00` and `₹75,00,000.00`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rupees = self.0 / PAISE_PER_RUPEE;
        let paise = self.0 % PAISE_PER_RUPEE;
        write!(f, "₹{}.{:02}", group_en_in(rupees), paise)
    }
}

/// Indian digit grouping: the last three digits form one group, everything
/// above that is grouped in twos (lakh/crore).
fn group_en_in(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
