//! Site settings storage.
//!
//! One JSONB document per key. The storefront uses a single `site` document;
//! the key column leaves room for future documents without a migration.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::settings::SiteSettings;

const SITE_SETTINGS_KEY: &str = "site";

/// Repository for settings database operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the site settings document, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored document does
    /// not deserialize.
    pub async fn get_site_settings(&self) -> Result<Option<SiteSettings>, RepositoryError> {
        let value: Option<JsonValue> =
            sqlx::query_scalar("SELECT value FROM site_settings WHERE key = $1")
                .bind(SITE_SETTINGS_KEY)
                .fetch_optional(self.pool)
                .await?;

        value
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid site settings document: {e}"))
            })
    }

    /// Replace the site settings document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_site_settings(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(settings).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable site settings: {e}"))
        })?;

        sqlx::query(
            "INSERT INTO site_settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(SITE_SETTINGS_KEY)
        .bind(value)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
