use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use axisphere_core::{DomainError, DomainResult};

/// Raw contact-form input, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub consent: bool,
}

/// A validated, normalized contact submission.
///
/// This is the insert-only row shape: blank optional fields become `None`
/// (stored as NULL), and `metadata` carries the submitting page's URL query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub consent: bool,
    pub metadata: BTreeMap<String, String>,
}

impl ContactForm {
    /// Validate and normalize into a [`ContactMessage`].
    ///
    /// Name and email are mandatory; consent to the privacy policy must be
    /// granted before anything is stored or sent.
    pub fn into_message(
        self,
        metadata: BTreeMap<String, String>,
    ) -> DomainResult<ContactMessage> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::validation("please fill name and email"));
        }
        if !self.consent {
            return Err(DomainError::validation(
                "please accept the privacy policy",
            ));
        }

        Ok(ContactMessage {
            name,
            email,
            phone: non_blank(self.phone),
            company: non_blank(self.company),
            subject: non_blank(self.subject),
            message: self.message.trim().to_string(),
            consent: true,
            metadata,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "  Asha Rao ".to_string(),
            email: "asha@example.com".to_string(),
            phone: String::new(),
            company: " Rao & Co ".to_string(),
            subject: String::new(),
            message: " We need help with ad campaigns. ".to_string(),
            consent: true,
        }
    }

    #[test]
    fn normalizes_and_nulls_blank_optionals() {
        let mut metadata = BTreeMap::new();
        metadata.insert("utm_source".to_string(), "newsletter".to_string());

        let message = filled_form().into_message(metadata.clone()).unwrap();
        assert_eq!(message.name, "Asha Rao");
        assert_eq!(message.phone, None);
        assert_eq!(message.company.as_deref(), Some("Rao & Co"));
        assert_eq!(message.subject, None);
        assert_eq!(message.message, "We need help with ad campaigns.");
        assert_eq!(message.metadata, metadata);
    }

    #[test]
    fn missing_name_or_email_is_rejected() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        let err = form.into_message(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let mut form = filled_form();
        form.email = String::new();
        let err = form.into_message(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn consent_is_required() {
        let mut form = filled_form();
        form.consent = false;
        let err = form.into_message(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
