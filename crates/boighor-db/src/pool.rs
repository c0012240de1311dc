//! # Database Pool Management
//!
//! Connection pool creation and configuration for the hosted Postgres
//! backend.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Admin UI startup                                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbConfig::new(url) ← or DbConfig::from_env()                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Database::connect(config).await ← create pool                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  db.books() / db.orders() / ... ← repository handles                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  db.close().await ← on shutdown                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no migration step: the hosted service owns the schema. The
//! layer configures no request timeout of its own; in-flight queries run to
//! completion or failure on the transport's defaults.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::repository::admin::AdminRepository;
use crate::repository::book::BookRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::order::OrderRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::stats::StatsRepository;
use boighor_core::config::StoreConfig;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("postgres://localhost/boighor")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection URL for the backend.
    pub database_url: String,

    /// Maximum number of connections in the pool.
    /// Default: 5 (sufficient for a single admin panel)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// How long to wait for a free connection.
    /// Default: 30 seconds
    pub acquire_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,
}

impl DbConfig {
    /// Creates a new database configuration with the given connection URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        DbConfig {
            database_url: database_url.into(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Builds a configuration from `BOIGHOR_*` environment variables.
    pub fn from_env() -> Self {
        let store = StoreConfig::from_env();
        DbConfig::new(store.database_url).max_connections(store.max_connections)
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the acquire timeout.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// An explicitly constructed value: the admin UI builds one at startup,
/// passes it (or its repositories) to whatever needs data, and closes it at
/// shutdown. There is no module-level client handle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Creates a new connection pool against the hosted backend.
    ///
    /// ## Arguments
    /// * `config` - Database configuration
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError::ConnectionFailed)` - Backend unreachable
    pub async fn connect(config: DbConfig) -> DbResult<Self> {
        info!(max_connections = config.max_connections, "Connecting to backend");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect(&config.database_url)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Database pool created");

        Ok(Database { pool })
    }

    /// Returns a reference to the connection pool.
    ///
    /// For advanced queries not covered by the repositories.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the book repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let books = db.books().search("ইতিহাস").await?;
    /// ```
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Returns the order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.pool.clone())
    }

    /// Returns the admin repository.
    pub fn admins(&self) -> AdminRepository {
        AdminRepository::new(self.pool.clone())
    }

    /// Returns the settings repository.
    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.pool.clone())
    }

    /// Returns the dashboard stats repository.
    pub fn stats(&self) -> StatsRepository {
        StatsRepository::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the backend is reachable (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("postgres://localhost/boighor_test")
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(5));

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.idle_timeout, Duration::from_secs(600));
    }
}
