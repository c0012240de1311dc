//! # Session Store
//!
//! File-per-key JSON persistence standing in for the browser's
//! localStorage: two keys, serialized as text, read back and parsed on
//! demand. Corrupt or missing values read as absent, never as a hard
//! failure; write failures are logged and swallowed, leaving the store
//! unwritten. The cached record mirrors one remote admin row and is not
//! authoritative.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key holding the cached admin profile.
pub const ADMIN_KEY: &str = "admin";

/// Key holding the boolean login flag.
pub const LOGIN_FLAG_KEY: &str = "is_admin_logged_in";

/// How long a cached login stays valid, measured from cache-write time
/// against the local clock.
pub const SESSION_TTL_HOURS: i64 = 24;

// =============================================================================
// Admin Session
// =============================================================================

/// The cached identity of the logged-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    /// When the cache entry was written.
    pub login_time: DateTime<Utc>,
}

impl AdminSession {
    /// Whether the fixed validity window has elapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.login_time) >= Duration::hours(SESSION_TTL_HOURS)
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Key/value persistence for the session cache.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Opens a store rooted at `dir`, creating the directory when missing.
    ///
    /// A directory that cannot be created is logged and tolerated; reads
    /// then see an empty store and writes are dropped.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "Could not create session directory");
        }
        SessionStore { dir }
    }

    /// Serializes and writes a value under `key`. Failures are logged, not
    /// surfaced.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "Could not serialize session value");
                return;
            }
        };

        if let Err(e) = fs::write(self.path(key), json) {
            warn!(key, error = %e, "Could not write session value");
        }
    }

    /// Reads and parses the value under `key`. Missing or corrupt values
    /// are `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = fs::read_to_string(self.path(key)).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// Removes the value under `key`, ignoring a missing entry.
    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path(key));
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_store() -> SessionStore {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "boighor-session-test-{}-{}",
            std::process::id(),
            seq
        ));
        let _ = fs::remove_dir_all(&dir);
        SessionStore::open(dir)
    }

    fn sample_session(login_time: DateTime<Utc>) -> AdminSession {
        AdminSession {
            id: uuid::Uuid::nil(),
            email: "admin@alhera.com".to_string(),
            name: "সুপার অ্যাডমিন".to_string(),
            role: "super_admin".to_string(),
            login_time,
        }
    }

    #[test]
    fn test_set_get_round_trip() {
        let store = test_store();
        let session = sample_session(Utc::now());

        store.set(ADMIN_KEY, &session);
        store.set(LOGIN_FLAG_KEY, &true);

        assert_eq!(store.get::<AdminSession>(ADMIN_KEY), Some(session));
        assert_eq!(store.get::<bool>(LOGIN_FLAG_KEY), Some(true));
    }

    #[test]
    fn test_missing_key_reads_as_absent() {
        let store = test_store();
        assert_eq!(store.get::<AdminSession>(ADMIN_KEY), None);
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let store = test_store();
        fs::write(store.dir().join("admin.json"), "{not valid json").unwrap();

        assert_eq!(store.get::<AdminSession>(ADMIN_KEY), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = test_store();
        store.set(LOGIN_FLAG_KEY, &true);

        store.remove(LOGIN_FLAG_KEY);
        store.remove(LOGIN_FLAG_KEY);

        assert_eq!(store.get::<bool>(LOGIN_FLAG_KEY), None);
    }

    #[test]
    fn test_expiry_window_boundaries() {
        let t = Utc::now();
        let session = sample_session(t);

        assert!(!session.is_expired(t + Duration::hours(23) + Duration::minutes(59)));
        assert!(session.is_expired(t + Duration::hours(24)));
        assert!(session.is_expired(t + Duration::hours(24) + Duration::seconds(1)));
    }
}
