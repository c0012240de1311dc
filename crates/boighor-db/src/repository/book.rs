//! # Book Repository
//!
//! Database operations for the catalogue.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    How catalogue search works                       │
//! │                                                                     │
//! │  User types: "ইতিহাস"                                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  escape_like() ← \, % and _ in the term lose their meaning          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  title ILIKE $1 OR author ILIKE $1 OR category ILIKE $1             │
//! │  with $1 = %ইতিহাস%  (bound parameter, never interpolated)          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Case-insensitive substring matches across three columns            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boighor_core::config::tables;
use boighor_core::{Book, BookPatch, NewBook};

/// Columns selected into the [`Book`] read model.
const COLUMNS: &str = "id, title, author, category, price, stock, created_at, updated_at";

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.books();
///
/// let all = repo.list().await?;
/// let one = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: PgPool) -> Self {
        BookRepository { pool }
    }

    /// Lists all books, newest first.
    pub async fn list(&self) -> DbResult<Vec<Book>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at DESC",
            tables::BOOKS
        );

        let books = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(books)
    }

    /// Gets a book by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - No such book
    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Book>> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", tables::BOOKS);

        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Inserts a new book.
    ///
    /// The id is assigned by the backend; both timestamps are stamped here at
    /// creation time. Returns the stored row.
    pub async fn create(&self, book: NewBook) -> DbResult<Book> {
        debug!(title = %book.title, "Inserting book");

        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (title, author, category, price, stock, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}",
            tables::BOOKS
        );

        let stored = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.category)
            .bind(book.price)
            .bind(book.stock)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    /// Applies a partial update to a book.
    ///
    /// `None` fields keep their stored value; `updated_at` is stamped.
    /// Returns the updated row.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no book with this id
    pub async fn update(&self, id: Uuid, patch: BookPatch) -> DbResult<Book> {
        debug!(%id, "Updating book");

        let now = Utc::now();
        let sql = format!(
            "UPDATE {} SET \
                title = COALESCE($2, title), \
                author = COALESCE($3, author), \
                category = COALESCE($4, category), \
                price = COALESCE($5, price), \
                stock = COALESCE($6, stock), \
                updated_at = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            tables::BOOKS
        );

        let updated = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .bind(patch.title)
            .bind(patch.author)
            .bind(patch.category)
            .bind(patch.price)
            .bind(patch.stock)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| DbError::not_found("Book", id))
    }

    /// Hard-deletes a book. There is no soft delete or tombstone.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no book with this id
    pub async fn delete(&self, id: Uuid) -> DbResult<()> {
        debug!(%id, "Deleting book");

        let sql = format!("DELETE FROM {} WHERE id = $1", tables::BOOKS);

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(())
    }

    /// Case-insensitive substring search over title, author and category.
    ///
    /// The term is escaped and bound as a parameter, so LIKE metacharacters
    /// in user input match literally.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Book>> {
        debug!(term = %term, "Searching books");

        let pattern = format!("%{}%", escape_like(term));
        let sql = format!(
            "SELECT {COLUMNS} FROM {} \
             WHERE title ILIKE $1 OR author ILIKE $1 OR category ILIKE $1",
            tables::BOOKS
        );

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = books.len(), "Search returned books");
        Ok(books)
    }

    /// Counts books.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", tables::BOOKS);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// Escapes LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passthrough() {
        assert_eq!(escape_like("ইতিহাস"), "ইতিহাস");
        assert_eq!(escape_like("history"), "history");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("%_\\"), "\\%\\_\\\\");
    }

    #[test]
    fn test_escape_like_empty() {
        assert_eq!(escape_like(""), "");
    }
}
