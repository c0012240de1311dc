//! # Domain Types
//!
//! Entities stored in the hosted backend's tables, plus the write DTOs the
//! admin UI submits.
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID assigned by the backend - immutable, used for lookups
//! - Business ID where one exists: `order_id` - human-readable, shown to
//!   customers and support staff
//!
//! Amounts (`price`, `total_amount`, `delivery_charge`, ...) are whole
//! currency units (৳) held as `i64`; the currency's fractional unit is unused
//! throughout the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Book
// =============================================================================

/// A book in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Book {
    /// Unique identifier, assigned by the backend.
    #[ts(as = "String")]
    pub id: Uuid,

    /// Title shown in the storefront and admin lists.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Category name (free text, normally one of the seeded categories).
    pub category: String,

    /// Price in whole currency units.
    pub price: i64,

    /// Units in stock.
    pub stock: i64,

    /// When the book was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the book was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a book. Timestamps and id are stamped by the layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
}

/// Partial update for a book. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
}

// =============================================================================
// Category
// =============================================================================

/// A catalogue category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    #[ts(as = "String")]
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Icon class shown next to the name (e.g. `fas fa-mosque`).
    pub icon: String,
}

/// Fields for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
}

// =============================================================================
// Order
// =============================================================================

/// A line item inside an order, stored in the order's JSONB column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    #[ts(as = "String")]
    pub book_id: Uuid,

    /// Title at the time of ordering.
    pub title: String,

    pub quantity: i64,

    /// Unit price at the time of ordering.
    pub unit_price: i64,
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    #[ts(as = "String")]
    pub id: Uuid,

    /// Human-readable order number (`ORD-` + 8 digits), derived from the
    /// creation timestamp. Not guaranteed unique under concurrent creation.
    pub order_id: String,

    /// Ordered items.
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub items: Vec<OrderItem>,

    /// Order total in whole currency units.
    pub total_amount: i64,

    /// Free-form status string, `"pending"` at creation.
    pub status: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Set on the first update; `None` for never-touched orders.
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating an order. `order_id`, status and the creation
/// timestamp are stamped by the layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
}

/// Partial update for an order. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderPatch {
    pub items: Option<Vec<OrderItem>>,
    pub total_amount: Option<i64>,
    pub status: Option<String>,
}

// =============================================================================
// Admin
// =============================================================================

/// An admin-panel user. This is the read model: the password column exists in
/// the table but is never selected into it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Admin {
    #[ts(as = "String")]
    pub id: Uuid,

    pub email: String,

    /// Display name.
    pub name: String,

    /// Free-form role string (e.g. `super_admin`).
    pub role: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Fields for creating an admin. Carries the password the login lookup
/// compares against.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAdmin {
    pub email: String,
    pub name: String,
    pub role: String,
    pub password: String,
}

/// Partial update for an admin. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

// =============================================================================
// Site Settings
// =============================================================================

/// Site-wide configuration, stored as a singleton row.
///
/// When the row is absent the layer falls back to [`SiteSettings::default`],
/// which carries the values the store launched with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct SiteSettings {
    /// Store title shown in the storefront header.
    pub title: String,

    /// Short description line.
    pub description: String,

    pub contact_email: String,

    pub contact_phone: String,

    /// Flat delivery charge in whole currency units.
    pub delivery_charge: i64,

    /// Order total above which delivery is free.
    pub free_delivery_amount: i64,

    /// Currency symbol for display.
    pub currency: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            title: "আল হেরা প্রকাশন".to_string(),
            description: "ইসলামিক বইয়ের এক বিশাল সংগ্রহশালা".to_string(),
            contact_email: "support@alhera.com".to_string(),
            contact_phone: "+৮৮০ ১৭১২-৩৪৫৬৭৮".to_string(),
            delivery_charge: 60,
            free_delivery_amount: 500,
            currency: "৳".to_string(),
        }
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// Scalar summaries shown on the dashboard, derived client-side from two
/// list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    pub total_books: i64,
    pub total_orders: i64,
    /// Sum of `total_amount` over all orders.
    pub total_revenue: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_record() {
        let settings = SiteSettings::default();
        assert_eq!(settings.delivery_charge, 60);
        assert_eq!(settings.free_delivery_amount, 500);
        assert_eq!(settings.currency, "৳");
        assert_eq!(settings.contact_email, "support@alhera.com");
        assert!(!settings.title.is_empty());
    }

    #[test]
    fn test_book_patch_default_is_empty() {
        let patch = BookPatch::default();
        assert!(patch.title.is_none());
        assert!(patch.author.is_none());
        assert!(patch.category.is_none());
        assert!(patch.price.is_none());
        assert!(patch.stock.is_none());
    }

    #[test]
    fn test_order_item_serde_round_trip() {
        let item = OrderItem {
            book_id: Uuid::nil(),
            title: "ইসলামের ইতিহাস".to_string(),
            quantity: 2,
            unit_price: 175,
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
