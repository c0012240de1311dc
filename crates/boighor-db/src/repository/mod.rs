//! # Repository Module
//!
//! One repository per backend table, each exposing the CRUD-shaped
//! operations the admin panel needs.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Admin UI                                                           │
//! │       │  db.books().search("ইতিহাস")                                │
//! │       ▼                                                             │
//! │  BookRepository                                                     │
//! │  ├── list / get_by_id / create / update / delete / search           │
//! │       │  one parameterized SQL query                                │
//! │       ▼                                                             │
//! │  Hosted Postgres backend                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation issues exactly one remote query and returns
//! `Result<T, DbError>`; side effects are confined to the one table touched.
//! Nothing here queues, retries or batches work.
//!
//! ## Available Repositories
//!
//! - [`book::BookRepository`] - catalogue CRUD and search
//! - [`category::CategoryRepository`] - category lookup list
//! - [`order::OrderRepository`] - orders and status updates
//! - [`admin::AdminRepository`] - admin accounts and the credential lookup
//! - [`settings::SettingsRepository`] - singleton site settings
//! - [`stats::StatsRepository`] - dashboard summaries

pub mod admin;
pub mod book;
pub mod category;
pub mod order;
pub mod settings;
pub mod stats;
