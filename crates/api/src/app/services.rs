use std::sync::Arc;

use sqlx::PgPool;

use axisphere_auth::{AdminAuth, AdminCredentials, InMemorySessionStore};
use axisphere_infra::{
    AppConfig, ContactStore, EmailNotifier, HttpEmailNotifier, NoopEmailNotifier,
    PostgresContactStore, UnconfiguredContactStore,
};

/// Everything the handlers need, wired once at startup.
pub struct AppServices {
    pub contact_store: Arc<dyn ContactStore>,
    pub email: Arc<dyn EmailNotifier>,
    pub admin: AdminAuth,
}

impl AppServices {
    pub fn new(
        contact_store: Arc<dyn ContactStore>,
        email: Arc<dyn EmailNotifier>,
        admin: AdminAuth,
    ) -> Self {
        Self {
            contact_store,
            email,
            admin,
        }
    }

    /// Wire from environment configuration.
    ///
    /// A missing or unreachable database degrades contact storage instead of
    /// failing startup; likewise for email credentials.
    pub async fn from_config(config: &AppConfig) -> Self {
        let contact_store: Arc<dyn ContactStore> = match &config.database_url {
            Some(url) => match PgPool::connect(url).await {
                Ok(pool) => Arc::new(PostgresContactStore::new(pool)),
                Err(err) => {
                    tracing::error!(error = %err, "database unreachable; contact storage disabled");
                    Arc::new(UnconfiguredContactStore)
                }
            },
            None => Arc::new(UnconfiguredContactStore),
        };

        let email: Arc<dyn EmailNotifier> = match config.email.clone() {
            Some(email_config) => Arc::new(HttpEmailNotifier::new(email_config)),
            None => Arc::new(NoopEmailNotifier),
        };

        let admin = AdminAuth::new(
            AdminCredentials {
                email: config.admin_email.clone(),
                password: config.admin_password.clone(),
            },
            Arc::new(InMemorySessionStore::default()),
        );

        Self::new(contact_store, email, admin)
    }
}
