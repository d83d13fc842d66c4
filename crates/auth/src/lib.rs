//! `axisphere-auth` — the admin session gate.
//!
//! This is a fixed-credential convenience gate for the internal invoice tool,
//! not a security boundary: there is no server-side account system and no
//! session expiry. The storage seam is injectable so tests run against an
//! in-memory store.

pub mod session;

pub use session::{
    AdminAuth, AdminCredentials, AdminSession, InMemorySessionStore, SessionStore, SessionToken,
};
