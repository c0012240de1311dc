//! # Bootstrap Seeding
//!
//! On first run against an empty backend the admin panel needs one admin
//! account and the six stock categories to be usable. The routine is
//! idempotent by emptiness: each table is seeded only when it has no rows,
//! so running it again is a no-op.
//!
//! This is not a migration system. No schema management happens here; the
//! hosted service owns the tables. Failures are logged and swallowed so a
//! flaky bootstrap never blocks the panel from loading.

use tracing::{info, warn};

use crate::error::DbResult;
use crate::pool::Database;
use boighor_core::config::{DEFAULT_CATEGORIES, INITIAL_ADMIN};
use boighor_core::{NewAdmin, NewCategory};

/// Seeds the admin and category tables when they are empty.
///
/// Each failure is logged at `warn` and not surfaced; the caller proceeds
/// regardless.
pub async fn ensure_seed_data(db: &Database) {
    if let Err(e) = seed_admins(db).await {
        warn!(error = %e, "Admin seeding failed");
    }

    if let Err(e) = seed_categories(db).await {
        warn!(error = %e, "Category seeding failed");
    }
}

/// Inserts the bootstrap admin when the admin table is empty.
async fn seed_admins(db: &Database) -> DbResult<()> {
    let admins = db.admins();

    if admins.count().await? > 0 {
        return Ok(());
    }

    admins
        .create(NewAdmin {
            email: INITIAL_ADMIN.email.to_string(),
            name: INITIAL_ADMIN.name.to_string(),
            role: INITIAL_ADMIN.role.to_string(),
            password: INITIAL_ADMIN.password.to_string(),
        })
        .await?;

    info!(email = INITIAL_ADMIN.email, "Seeded bootstrap admin");
    Ok(())
}

/// Inserts the six stock categories, one at a time, when the category table
/// is empty.
async fn seed_categories(db: &Database) -> DbResult<()> {
    let categories = db.categories();

    if categories.count().await? > 0 {
        return Ok(());
    }

    for (name, icon) in DEFAULT_CATEGORIES {
        categories
            .create(NewCategory {
                name: name.to_string(),
                icon: icon.to_string(),
            })
            .await?;
    }

    info!(count = DEFAULT_CATEGORIES.len(), "Seeded categories");
    Ok(())
}
