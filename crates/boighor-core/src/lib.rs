//! # boighor-core: Domain Types for the Boighor Admin Panel
//!
//! Pure domain types and static configuration for the bookstore admin
//! data-access layer. No I/O happens in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Boighor Admin Data Flow                        │
//! │                                                                     │
//! │  Admin UI (TypeScript)                                              │
//! │       │  generated bindings (ts-rs)                                 │
//! │       ▼                                                             │
//! │  ★ boighor-core (THIS CRATE) ★                                      │
//! │       Book · Category · Order · Admin · SiteSettings                │
//! │       StoreConfig · seed records · table names                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  boighor-db                                                         │
//! │       repositories · session cache · auth · seeding                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Hosted Postgres backend                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and write DTOs (Book, Order, SiteSettings, ...)
//! - [`config`] - Environment config, table names, seed records

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boighor_core::Book` instead of
// `use boighor_core::types::Book`

pub use config::{StoreConfig, DEFAULT_CATEGORIES, INITIAL_ADMIN};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status stamped on every newly created order.
///
/// Order status is a free-form string progressing from this initial value;
/// the admin UI moves it forward via `OrderRepository::update_status`.
pub const INITIAL_ORDER_STATUS: &str = "pending";
