//! Hosted-service adapters: configuration from the environment, the contact
//! message store, and the transactional email sender.

pub mod config;
pub mod contact_store;
pub mod email;

pub use config::{AppConfig, EmailConfig};
pub use contact_store::{
    ContactStore, ContactStoreError, InMemoryContactStore, PostgresContactStore,
    UnconfiguredContactStore,
};
pub use email::{EmailNotifier, EmailOutcome, HttpEmailNotifier, NoopEmailNotifier};
