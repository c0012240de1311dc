//! # Admin Repository
//!
//! Database operations for admin-panel accounts.
//!
//! The password column is write-only from this layer's point of view: it is
//! compared inside [`find_by_credentials`](AdminRepository::find_by_credentials)
//! and never selected into the [`Admin`] read model. Creating and deleting an
//! admin are plain table writes; no separate identity service is involved.

use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boighor_core::config::tables;
use boighor_core::{Admin, AdminPatch, NewAdmin};

/// Columns selected into the [`Admin`] read model. Excludes `password`.
const COLUMNS: &str = "id, email, name, role, created_at";

/// Repository for admin database operations.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Creates a new AdminRepository.
    pub fn new(pool: PgPool) -> Self {
        AdminRepository { pool }
    }

    /// Lists all admins, newest first.
    pub async fn list(&self) -> DbResult<Vec<Admin>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at DESC",
            tables::ADMINS
        );

        let admins = sqlx::query_as::<_, Admin>(&sql).fetch_all(&self.pool).await?;
        Ok(admins)
    }

    /// Inserts a new admin. Returns the stored row (without the password).
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - email already registered
    pub async fn create(&self, admin: NewAdmin) -> DbResult<Admin> {
        debug!(email = %admin.email, "Inserting admin");

        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (email, name, role, password, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}",
            tables::ADMINS
        );

        let stored = sqlx::query_as::<_, Admin>(&sql)
            .bind(&admin.email)
            .bind(&admin.name)
            .bind(&admin.role)
            .bind(&admin.password)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    /// Applies a partial update to an admin. Returns the updated row.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no admin with this id
    pub async fn update(&self, id: Uuid, patch: AdminPatch) -> DbResult<Admin> {
        debug!(%id, "Updating admin");

        let sql = format!(
            "UPDATE {} SET \
                email = COALESCE($2, email), \
                name = COALESCE($3, name), \
                role = COALESCE($4, role), \
                password = COALESCE($5, password) \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            tables::ADMINS
        );

        let updated = sqlx::query_as::<_, Admin>(&sql)
            .bind(id)
            .bind(patch.email)
            .bind(patch.name)
            .bind(patch.role)
            .bind(patch.password)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| DbError::not_found("Admin", id))
    }

    /// Hard-deletes an admin account.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no admin with this id
    pub async fn delete(&self, id: Uuid) -> DbResult<()> {
        debug!(%id, "Deleting admin");

        let sql = format!("DELETE FROM {} WHERE id = $1", tables::ADMINS);

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Admin", id));
        }

        Ok(())
    }

    /// Looks up an admin where both email and password columns match.
    ///
    /// The direct-credential login lookup. Both values are bound parameters;
    /// a miss (wrong email or wrong password) is `Ok(None)` so the auth
    /// facade can collapse it into one generic failure.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DbResult<Option<Admin>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE email = $1 AND password = $2",
            tables::ADMINS
        );

        let admin = sqlx::query_as::<_, Admin>(&sql)
            .bind(email)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin)
    }

    /// Counts admins.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", tables::ADMINS);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
