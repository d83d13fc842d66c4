//! Environment-driven configuration.
//!
//! Every knob has a dev-friendly default so the service starts on a clean
//! machine; missing hosted-service credentials degrade the corresponding
//! feature instead of failing startup.

/// Credentials and endpoint for the transactional email provider.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Directory the built site is served from.
    pub static_dir: String,
    pub database_url: Option<String>,
    pub email: Option<EmailConfig>,
    pub admin_email: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL");
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set; contact messages will not be stored");
        }

        let email = match (
            lookup("EMAILJS_SERVICE_ID"),
            lookup("EMAILJS_TEMPLATE_ID"),
            lookup("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailConfig {
                service_id,
                template_id,
                public_key,
                endpoint: lookup("EMAILJS_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_EMAIL_ENDPOINT.to_string()),
            }),
            _ => {
                tracing::warn!("EMAILJS_* credentials not set; contact emails will be skipped");
                None
            }
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "dist/spa".to_string()),
            database_url,
            email,
            admin_email: lookup("ADMIN_EMAIL").unwrap_or_else(|| "admin@axisphere.in".to_string()),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "admin2024".to_string()),
        }
    }
}
