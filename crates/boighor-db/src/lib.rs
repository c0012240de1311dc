//! # boighor-db: Data-Access Layer for the Boighor Admin Panel
//!
//! This crate wraps the hosted backend's Postgres tables behind typed
//! repositories, and owns the local session cache, the auth facade and the
//! bootstrap seeding.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Boighor Admin Data Flow                         │
//! │                                                                     │
//! │  Admin UI                                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  boighor-db (THIS CRATE)                      │  │
//! │  │                                                               │  │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────────┐   │  │
//! │  │   │  Database  │   │ Repositories │   │ AuthService      │   │  │
//! │  │   │ (pool.rs)  │◄──│ book, order, │   │ + SessionStore   │   │  │
//! │  │   │            │   │ admin, ...   │   │ (local cache)    │   │  │
//! │  │   └────────────┘   └──────────────┘   └──────────────────┘   │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Hosted Postgres backend (schema owned by the service)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and the `Database` handle
//! - [`error`] - Categorized remote-call errors
//! - [`repository`] - One repository per entity
//! - [`session`] - Local session cache (file-per-key JSON)
//! - [`auth`] - Login / session check / logout facade
//! - [`seed`] - Idempotent bootstrap seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boighor_db::{AuthService, Database, DbConfig, SessionStore};
//!
//! let db = Database::connect(DbConfig::from_env()).await?;
//! boighor_db::ensure_seed_data(&db).await;
//!
//! let auth = AuthService::new(db.clone(), SessionStore::open(".boighor-session"));
//! let books = db.books().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{AuthError, AuthService};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::ensure_seed_data;
pub use session::{AdminSession, SessionStore};

// Repository re-exports for convenience
pub use repository::admin::AdminRepository;
pub use repository::book::BookRepository;
pub use repository::category::CategoryRepository;
pub use repository::order::OrderRepository;
pub use repository::settings::SettingsRepository;
pub use repository::stats::StatsRepository;
