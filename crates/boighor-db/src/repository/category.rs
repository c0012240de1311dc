//! # Category Repository
//!
//! Database operations for the category lookup list. Categories are a flat
//! list; books reference them by name.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boighor_core::config::tables;
use boighor_core::{Category, NewCategory};

const COLUMNS: &str = "id, name, icon";

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: PgPool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories, alphabetically by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY name",
            tables::CATEGORIES
        );

        let categories = sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    /// Inserts a new category. Returns the stored row.
    pub async fn create(&self, category: NewCategory) -> DbResult<Category> {
        debug!(name = %category.name, "Inserting category");

        let sql = format!(
            "INSERT INTO {} (name, icon) VALUES ($1, $2) RETURNING {COLUMNS}",
            tables::CATEGORIES
        );

        let stored = sqlx::query_as::<_, Category>(&sql)
            .bind(&category.name)
            .bind(&category.icon)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    /// Hard-deletes a category.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no category with this id
    pub async fn delete(&self, id: Uuid) -> DbResult<()> {
        debug!(%id, "Deleting category");

        let sql = format!("DELETE FROM {} WHERE id = $1", tables::CATEGORIES);

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Counts categories.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", tables::CATEGORIES);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
