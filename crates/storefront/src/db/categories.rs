//! Category repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lavibaby_core::CategoryId;

use super::RepositoryError;
use crate::models::product::Category;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    slug: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
            slug: row.slug,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

const SELECT_CATEGORY: &str = "SELECT id, name, slug, image_url, created_at FROM categories";

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(&format!("{SELECT_CATEGORY} ORDER BY name"))
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Get a category by its URL handle.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let row: Option<CategoryRow> =
            sqlx::query_as(&format!("{SELECT_CATEGORY} WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Category::from))
    }
}
