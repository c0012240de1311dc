//! # Settings Repository
//!
//! The settings table holds one row of site-wide configuration. A missing
//! row is not an error: [`get`](SettingsRepository::get) falls back to the
//! fixed default record, so a fresh deployment renders with the values the
//! store launched with.

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;
use boighor_core::config::tables;
use boighor_core::SiteSettings;

const COLUMNS: &str =
    "title, description, contact_email, contact_phone, delivery_charge, free_delivery_amount, currency";

/// Fixed key of the singleton row; the upsert conflicts on it.
const SETTINGS_ROW_ID: i32 = 1;

/// Repository for the site-settings singleton.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: PgPool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads the settings row, falling back to [`SiteSettings::default`]
    /// when the table is empty.
    pub async fn get(&self) -> DbResult<SiteSettings> {
        let sql = format!("SELECT {COLUMNS} FROM {} LIMIT 1", tables::SETTINGS);

        let row = sqlx::query_as::<_, SiteSettings>(&sql)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.unwrap_or_default())
    }

    /// Upserts the singleton row. Returns the stored settings.
    pub async fn update(&self, settings: SiteSettings) -> DbResult<SiteSettings> {
        debug!("Upserting site settings");

        let sql = format!(
            "INSERT INTO {} \
                (id, title, description, contact_email, contact_phone, \
                 delivery_charge, free_delivery_amount, currency) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                title = EXCLUDED.title, \
                description = EXCLUDED.description, \
                contact_email = EXCLUDED.contact_email, \
                contact_phone = EXCLUDED.contact_phone, \
                delivery_charge = EXCLUDED.delivery_charge, \
                free_delivery_amount = EXCLUDED.free_delivery_amount, \
                currency = EXCLUDED.currency \
             RETURNING {COLUMNS}",
            tables::SETTINGS
        );

        let stored = sqlx::query_as::<_, SiteSettings>(&sql)
            .bind(SETTINGS_ROW_ID)
            .bind(&settings.title)
            .bind(&settings.description)
            .bind(&settings.contact_email)
            .bind(&settings.contact_phone)
            .bind(settings.delivery_charge)
            .bind(settings.free_delivery_amount)
            .bind(&settings.currency)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }
}
