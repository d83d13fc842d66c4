//! `axisphere-catalog` — the pricing catalog.
//!
//! Packages are a closed enumeration, so a catalog lookup can never miss at
//! runtime; the only open-string entry point is `Package::from_display_name`,
//! whose callers fall back to the starter package.

pub mod package;

pub use package::{Package, PackagePrice};
