//! Notification email for new contact messages.
//!
//! The email goes out before the message is stored, and its outcome is
//! reported alongside the store result rather than failing the submission.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use axisphere_contact::ContactMessage;

use crate::config::EmailConfig;

/// What happened to the notification email for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum EmailOutcome {
    Sent,
    /// No email credentials configured.
    Skipped,
    Failed(String),
}

#[async_trait]
pub trait EmailNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage, received_at: DateTime<Utc>) -> EmailOutcome;
}

/// Sends through the hosted template-email API.
pub struct HttpEmailNotifier {
    config: EmailConfig,
    client: reqwest::Client,
}

impl HttpEmailNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// The provider's template payload. Optional fields get readable
/// placeholders so the rendered email never has blank lines.
pub fn email_payload(
    config: &EmailConfig,
    message: &ContactMessage,
    received_at: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.public_key,
        "template_params": {
            "from_name": message.name,
            "from_email": message.email,
            "phone": message.phone.as_deref().unwrap_or("Not provided"),
            "company": message.company.as_deref().unwrap_or("Not provided"),
            "subject": message.subject.as_deref().unwrap_or("General Inquiry"),
            "message": message.message,
            "submitted_at": received_at.format("%-d %B %Y %H:%M UTC").to_string(),
        },
    })
}

#[async_trait]
impl EmailNotifier for HttpEmailNotifier {
    async fn notify(&self, message: &ContactMessage, received_at: DateTime<Utc>) -> EmailOutcome {
        let payload = email_payload(&self.config, message, received_at);
        let result = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => EmailOutcome::Sent,
            Ok(response) => {
                let reason = format!("provider returned {}", response.status());
                tracing::warn!(%reason, "contact notification email failed");
                EmailOutcome::Failed(reason)
            }
            Err(err) => {
                let reason = err.to_string();
                tracing::warn!(%reason, "contact notification email failed");
                EmailOutcome::Failed(reason)
            }
        }
    }
}

/// Used when no email credentials are configured.
#[derive(Debug, Default)]
pub struct NoopEmailNotifier;

#[async_trait]
impl EmailNotifier for NoopEmailNotifier {
    async fn notify(&self, _message: &ContactMessage, _received_at: DateTime<Utc>) -> EmailOutcome {
        EmailOutcome::Skipped
    }
}
