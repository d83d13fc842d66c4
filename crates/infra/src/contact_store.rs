//! Persistence for contact messages.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

use axisphere_contact::ContactMessage;

#[derive(Debug, Error)]
pub enum ContactStoreError {
    #[error("contact store is not configured")]
    NotConfigured,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage seam for accepted contact messages.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactStoreError>;
}

/// Hosted Postgres store, one row per submission.
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    #[tracing::instrument(skip_all, err)]
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactStoreError> {
        sqlx::query(
            "INSERT INTO contact_messages \
             (id, name, email, phone, company, subject, message, consent, metadata, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())",
        )
        .bind(Uuid::now_v7())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.company)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.consent)
        .bind(Json(&message.metadata))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// In-process store used by tests and local development without a database.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    inner: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactStore {
    pub fn all(&self) -> Vec<ContactMessage> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactStoreError> {
        self.inner.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Stand-in used when `DATABASE_URL` is absent; every insert fails with
/// [`ContactStoreError::NotConfigured`].
#[derive(Debug, Default)]
pub struct UnconfiguredContactStore;

#[async_trait]
impl ContactStore for UnconfiguredContactStore {
    async fn insert(&self, _message: &ContactMessage) -> Result<(), ContactStoreError> {
        Err(ContactStoreError::NotConfigured)
    }
}
