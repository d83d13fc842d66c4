use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The marker stored for a logged-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub email: String,
    pub is_authenticated: bool,
}

/// Opaque token handed to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Storage seam for admin sessions.
///
/// Production uses the process-lifetime in-memory store; tests may substitute
/// their own implementation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, token: SessionToken, session: AdminSession);
    fn get(&self, token: &SessionToken) -> Option<AdminSession>;
    fn remove(&self, token: &SessionToken);
}

/// Process-lifetime session store with no expiry.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: Mutex<HashMap<SessionToken, AdminSession>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, token: SessionToken, session: AdminSession) {
        self.inner.lock().unwrap().insert(token, session);
    }

    fn get(&self, token: &SessionToken) -> Option<AdminSession> {
        self.inner.lock().unwrap().get(token).cloned()
    }

    fn remove(&self, token: &SessionToken) {
        self.inner.lock().unwrap().remove(token);
    }
}

/// The fixed admin credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: "admin@axisphere.in".to_string(),
            password: "admin2024".to_string(),
        }
    }
}

/// Admin session manager: fixed-credential check over an injected store.
pub struct AdminAuth {
    credentials: AdminCredentials,
    store: Arc<dyn SessionStore>,
}

impl AdminAuth {
    pub fn new(credentials: AdminCredentials, store: Arc<dyn SessionStore>) -> Self {
        Self { credentials, store }
    }

    /// Check the credential pair; on success store an authenticated session
    /// and return its token. `None` means the pair did not match.
    pub fn login(&self, email: &str, password: &str) -> Option<SessionToken> {
        if email != self.credentials.email || password != self.credentials.password {
            return None;
        }
        let token = SessionToken::generate();
        self.store.insert(
            token.clone(),
            AdminSession {
                email: email.to_string(),
                is_authenticated: true,
            },
        );
        Some(token)
    }

    pub fn session(&self, token: &SessionToken) -> Option<AdminSession> {
        self.store.get(token)
    }

    pub fn logout(&self, token: &SessionToken) {
        self.store.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AdminAuth {
        AdminAuth::new(
            AdminCredentials::default(),
            Arc::new(InMemorySessionStore::default()),
        )
    }

    #[test]
    fn login_with_fixed_credentials_creates_a_session() {
        let auth = auth();
        let token = auth.login("admin@axisphere.in", "admin2024").unwrap();

        let session = auth.session(&token).unwrap();
        assert_eq!(session.email, "admin@axisphere.in");
        assert!(session.is_authenticated);
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let auth = auth();
        assert!(auth.login("admin@axisphere.in", "wrong").is_none());
        assert!(auth.login("someone@else.in", "admin2024").is_none());
    }

    #[test]
    fn logout_discards_the_session() {
        let auth = auth();
        let token = auth.login("admin@axisphere.in", "admin2024").unwrap();
        auth.logout(&token);
        assert!(auth.session(&token).is_none());
    }

    #[test]
    fn unknown_tokens_have_no_session() {
        let auth = auth();
        assert!(auth.session(&SessionToken::from("made-up")).is_none());
    }
}
