//! # Order Repository
//!
//! Database operations for customer orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                               │
//! │                                                                     │
//! │  1. CREATE                                                          │
//! │     └── create() → Order { order_id: "ORD-…", status: "pending" }   │
//! │                                                                     │
//! │  2. PROGRESS                                                        │
//! │     └── update_status() → status moves forward (free-form string,   │
//! │         no transition rules are enforced)                           │
//! │                                                                     │
//! │  3. AMEND                                                           │
//! │     └── update() → partial merge, stamps updated_at                 │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boighor_core::config::tables;
use boighor_core::{NewOrder, Order, OrderPatch, INITIAL_ORDER_STATUS};

const COLUMNS: &str = "id, order_id, items, total_amount, status, created_at, updated_at";

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: PgPool) -> Self {
        OrderRepository { pool }
    }

    /// Creates a new order.
    ///
    /// Stamps the business order number, the `"pending"` status and the
    /// creation timestamp; the row id is assigned by the backend. Returns
    /// the stored row.
    pub async fn create(&self, order: NewOrder) -> DbResult<Order> {
        let now = Utc::now();
        let order_number = generate_order_number(now);

        debug!(order_id = %order_number, "Creating order");

        let sql = format!(
            "INSERT INTO {} (order_id, items, total_amount, status, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}",
            tables::ORDERS
        );

        let stored = sqlx::query_as::<_, Order>(&sql)
            .bind(&order_number)
            .bind(Json(&order.items))
            .bind(order.total_amount)
            .bind(INITIAL_ORDER_STATUS)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    /// Lists all orders, newest first.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at DESC",
            tables::ORDERS
        );

        let orders = sqlx::query_as::<_, Order>(&sql).fetch_all(&self.pool).await?;
        Ok(orders)
    }

    /// Gets an order by its row id (not the business order number).
    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Order>> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", tables::ORDERS);

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Applies a partial update to an order.
    ///
    /// `None` fields keep their stored value; `updated_at` is stamped.
    /// Returns the updated row.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with this id
    pub async fn update(&self, id: Uuid, patch: OrderPatch) -> DbResult<Order> {
        debug!(%id, "Updating order");

        let now = Utc::now();
        let sql = format!(
            "UPDATE {} SET \
                items = COALESCE($2, items), \
                total_amount = COALESCE($3, total_amount), \
                status = COALESCE($4, status), \
                updated_at = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            tables::ORDERS
        );

        let updated = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(patch.items.as_ref().map(Json))
            .bind(patch.total_amount)
            .bind(patch.status)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| DbError::not_found("Order", id))
    }

    /// Updates only the status column.
    ///
    /// Distinct from [`update`](Self::update): the single-column write the
    /// order list uses when an admin moves an order forward.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with this id
    pub async fn update_status(&self, id: Uuid, status: &str) -> DbResult<Order> {
        debug!(%id, status = %status, "Updating order status");

        let sql = format!(
            "UPDATE {} SET status = $2 WHERE id = $1 RETURNING {COLUMNS}",
            tables::ORDERS
        );

        let updated = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| DbError::not_found("Order", id))
    }

    /// Counts orders.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", tables::ORDERS);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// Derives the business order number from the creation timestamp:
/// `ORD-` followed by the last 8 digits of the unix-milliseconds clock.
///
/// Two orders created in the same millisecond collide; the window repeats
/// roughly every 28 hours. Callers that need a guaranteed-unique key use the
/// row id.
fn generate_order_number(now: DateTime<Utc>) -> String {
    format!("ORD-{:08}", now.timestamp_millis() % 100_000_000)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_number_format() {
        let number = generate_order_number(Utc::now());
        assert!(number.starts_with("ORD-"));

        let digits = &number["ORD-".len()..];
        assert_eq!(digits.len(), 8);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_order_number_uses_last_eight_digits() {
        let at = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        assert_eq!(generate_order_number(at), "ORD-00123456");
    }

    #[test]
    fn test_order_number_pads_small_remainders() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_042).unwrap();
        assert_eq!(generate_order_number(at), "ORD-00000042");
    }
}
