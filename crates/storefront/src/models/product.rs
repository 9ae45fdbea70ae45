//! Catalog domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lavibaby_core::{CategoryId, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL handle.
    pub slug: String,
    /// Plain text description.
    pub description: String,
    /// Current price.
    pub price: Price,
    /// Image URLs, primary first.
    pub image_urls: Vec<String>,
    /// Owning category.
    pub category_id: CategoryId,
    /// Units on hand. Display data only - the cart does not reserve stock.
    pub stock: i32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The first image, used for cart and order rows.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL handle.
    pub slug: String,
    /// Category image.
    pub image_url: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating or replacing a product (admin surface).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub stock: i32,
}
