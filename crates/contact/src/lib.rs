//! `axisphere-contact` — lead-capture submissions from the contact form.

pub mod message;

pub use message::{ContactForm, ContactMessage};
