//! `axisphere-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy shared by every other crate, and the minor-unit money
//! type with the currency formatting the invoice views rely on.

pub mod error;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use money::Money;
