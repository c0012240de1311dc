//! # Dashboard Stats
//!
//! The dashboard shows three scalars: book count, order count, revenue sum.
//! They are derived client-side from two independent list queries issued
//! concurrently; there is no ordering dependency between the two reads, and
//! a failure in either fails the whole aggregate.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use boighor_core::config::tables;
use boighor_core::DashboardStats;

/// Repository for dashboard summaries.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Creates a new StatsRepository.
    pub fn new(pool: PgPool) -> Self {
        StatsRepository { pool }
    }

    /// Computes the dashboard summaries.
    ///
    /// Issues the book-id and order-amount reads concurrently and folds the
    /// three scalars locally. Either read failing fails the aggregate; there
    /// is no partial result.
    pub async fn dashboard(&self) -> DbResult<DashboardStats> {
        let books_sql = format!("SELECT id FROM {}", tables::BOOKS);
        let orders_sql = format!("SELECT id, total_amount FROM {}", tables::ORDERS);

        let (book_ids, order_rows) = tokio::try_join!(
            sqlx::query_scalar::<_, Uuid>(&books_sql).fetch_all(&self.pool),
            sqlx::query_as::<_, (Uuid, i64)>(&orders_sql).fetch_all(&self.pool),
        )?;

        let total_revenue = order_rows.iter().map(|(_, amount)| amount).sum();

        let stats = DashboardStats {
            total_books: book_ids.len() as i64,
            total_orders: order_rows.len() as i64,
            total_revenue,
        };

        debug!(
            total_books = stats.total_books,
            total_orders = stats.total_orders,
            total_revenue = stats.total_revenue,
            "Dashboard stats computed"
        );

        Ok(stats)
    }
}
