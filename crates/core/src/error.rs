//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in this system is caught at the boundary of the user action
/// that triggered it; none of these variants is allowed to escalate into a
/// process crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or malformed. Surfaced inline; the user
    /// corrects the input and resubmits.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A third-party call (data store, email API) failed. The in-progress
    /// form data stays with the caller so the action can be retried.
    #[error("integration failed: {0}")]
    Integration(String),

    /// Document export failed. The document model is recomputed from form
    /// state, so nothing is lost; the caller may retry.
    #[error("export failed: {0}")]
    Export(String),

    /// Required integration credentials are absent. Detected eagerly at
    /// startup; dependent calls short-circuit instead of failing deep down.
    #[error("service not configured: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn integration(msg: impl Into<String>) -> Self {
        Self::Integration(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
