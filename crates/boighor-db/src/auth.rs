//! # Auth Facade
//!
//! Login, session-validity check, current-admin getter and logout for the
//! admin panel.
//!
//! This is the direct-comparison design: the admin row carries a password
//! column and login is one parameterized lookup where both email and
//! password must match. No separate identity service is involved.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                             │
//! │       │ one credential lookup                                       │
//! │       ▼                                                             │
//! │  match ──► cache AdminSession + flag ──► Ok(Admin)                  │
//! │  miss  ──► Err(InvalidCredentials)   (one generic message for       │
//! │                                       wrong email or password)      │
//! │                                                                     │
//! │  is_logged_in() / current_admin()                                   │
//! │       │ local cache only, no remote call                            │
//! │       ▼                                                             │
//! │  cached session younger than 24h ──► valid                          │
//! │  absent / corrupt / expired       ──► cache cleared, logged out     │
//! │                                                                     │
//! │  logout() ──► both cache keys removed                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validity check runs purely against the local clock; there is no
//! server-side revocation. The original page redirect on logout is a UI
//! concern and stays out of this layer.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::DbError;
use crate::pool::Database;
use crate::session::{AdminSession, SessionStore, ADMIN_KEY, LOGIN_FLAG_KEY};
use boighor_core::Admin;

// =============================================================================
// Auth Error
// =============================================================================

/// Login failures, mapped to fixed user-facing messages.
///
/// The Display text never carries the raw backend message; for `Backend`
/// the underlying [`DbError`] stays reachable through `source()` for logs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or wrong password, collapsed into one message.
    #[error("ভুল ইমেইল বা পাসওয়ার্ড")]
    InvalidCredentials,

    /// The credential lookup itself failed.
    #[error("লগইন প্রক্রিয়ায় ত্রুটি")]
    Backend(#[from] DbError),
}

// =============================================================================
// Auth Service
// =============================================================================

/// The auth facade: a database handle plus the local session cache.
///
/// Constructed explicitly at startup; there is no session on startup until
/// a cached one is found valid, and logout closes the session explicitly.
#[derive(Debug, Clone)]
pub struct AuthService {
    db: Database,
    sessions: SessionStore,
}

impl AuthService {
    /// Creates the facade over an existing database handle and store.
    pub fn new(db: Database, sessions: SessionStore) -> Self {
        AuthService { db, sessions }
    }

    /// Attempts a login with the given credentials.
    ///
    /// On success the admin's identity is cached locally with the current
    /// time as the start of the 24-hour validity window.
    pub async fn login(&self, email: &str, password: &str) -> Result<Admin, AuthError> {
        let found = match self.db.admins().find_by_credentials(email, password).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Credential lookup failed");
                return Err(AuthError::Backend(e));
            }
        };

        let admin = found.ok_or(AuthError::InvalidCredentials)?;

        debug!(email = %admin.email, "Login succeeded");

        let session = AdminSession {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
            role: admin.role.clone(),
            login_time: Utc::now(),
        };
        self.sessions.set(ADMIN_KEY, &session);
        self.sessions.set(LOGIN_FLAG_KEY, &true);

        Ok(admin)
    }

    /// Whether a valid cached session exists.
    ///
    /// Purely local: the cached entry must be present, parseable and younger
    /// than the validity window. Anything else clears the cache and reports
    /// logged out. Refreshes the login flag when valid.
    pub fn is_logged_in(&self) -> bool {
        match valid_session(&self.sessions) {
            Some(_) => {
                self.sessions.set(LOGIN_FLAG_KEY, &true);
                true
            }
            None => false,
        }
    }

    /// The cached admin identity, when a valid session exists.
    pub fn current_admin(&self) -> Option<AdminSession> {
        valid_session(&self.sessions)
    }

    /// Ends the session by removing both cache keys.
    pub fn logout(&self) {
        debug!("Logging out");
        self.sessions.remove(ADMIN_KEY);
        self.sessions.remove(LOGIN_FLAG_KEY);
    }
}

/// Reads the cached session, dropping it when expired or unreadable.
fn valid_session(sessions: &SessionStore) -> Option<AdminSession> {
    let session: AdminSession = match sessions.get(ADMIN_KEY) {
        Some(session) => session,
        None => {
            // Corrupt and missing entries look identical here; either way
            // the flag key must not outlive the profile key.
            sessions.remove(LOGIN_FLAG_KEY);
            return None;
        }
    };

    if session.is_expired(Utc::now()) {
        debug!(email = %session.email, "Cached session expired");
        sessions.remove(ADMIN_KEY);
        sessions.remove(LOGIN_FLAG_KEY);
        return None;
    }

    Some(session)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_store() -> SessionStore {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "boighor-auth-test-{}-{}",
            std::process::id(),
            seq
        ));
        let _ = std::fs::remove_dir_all(&dir);
        SessionStore::open(dir)
    }

    fn cached_session(store: &SessionStore, age: Duration) {
        let session = AdminSession {
            id: uuid::Uuid::nil(),
            email: "admin@alhera.com".to_string(),
            name: "সুপার অ্যাডমিন".to_string(),
            role: "super_admin".to_string(),
            login_time: Utc::now() - age,
        };
        store.set(ADMIN_KEY, &session);
        store.set(LOGIN_FLAG_KEY, &true);
    }

    #[test]
    fn test_session_valid_just_inside_window() {
        let store = test_store();
        cached_session(&store, Duration::hours(23) + Duration::minutes(59));

        assert!(valid_session(&store).is_some());
    }

    #[test]
    fn test_session_invalid_past_window() {
        let store = test_store();
        cached_session(&store, Duration::hours(24) + Duration::seconds(1));

        assert!(valid_session(&store).is_none());
        // Expiry clears both keys.
        assert_eq!(store.get::<bool>(LOGIN_FLAG_KEY), None);
        assert!(store.get::<AdminSession>(ADMIN_KEY).is_none());
    }

    #[test]
    fn test_missing_session_is_logged_out() {
        let store = test_store();
        assert!(valid_session(&store).is_none());
    }

    #[test]
    fn test_corrupt_session_is_logged_out() {
        let store = test_store();
        store.set(ADMIN_KEY, &"not a session object");
        store.set(LOGIN_FLAG_KEY, &true);

        assert!(valid_session(&store).is_none());
        assert_eq!(store.get::<bool>(LOGIN_FLAG_KEY), None);
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "ভুল ইমেইল বা পাসওয়ার্ড");
    }

    #[test]
    fn test_backend_error_message_is_fixed() {
        let err = AuthError::Backend(DbError::ConnectionFailed("tcp reset".to_string()));
        // The user-facing text never carries the backend detail.
        assert_eq!(err.to_string(), "লগইন প্রক্রিয়ায় ত্রুটি");
        assert!(std::error::Error::source(&err).is_some());
    }
}
