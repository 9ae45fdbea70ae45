//! Catalog reads with caching.
//!
//! Fronts the product and category repositories with a `moka` cache
//! (5-minute TTL). Admin mutations call [`CatalogService::invalidate`] so
//! edits become visible without waiting out the TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use lavibaby_core::{CategoryId, ProductId};

use crate::db::RepositoryError;
use crate::db::categories::CategoryRepository;
use crate::db::products::ProductRepository;
use crate::models::product::{Category, Product};

/// Cache key for catalog lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    ProductsByCategory(CategoryId),
    Product(ProductId),
    Categories,
    Category(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
    Categories(Vec<Category>),
    Category(Box<Category>),
}

/// Cached read access to the catalog.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    pool: PgPool,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogService {
    /// Create a new catalog service over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogServiceInner { pool, cache }),
        }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    pub async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            return Ok(products);
        }

        let products = ProductRepository::new(&self.inner.pool).list().await?;
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// List products in a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    pub async fn products_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let key = CacheKey::ProductsByCategory(category_id);
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            return Ok(products);
        }

        let products = ProductRepository::new(&self.inner.pool)
            .list_by_category(category_id)
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a product by ID. Misses are not cached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            return Ok(Some(*product));
        }

        let product = ProductRepository::new(&self.inner.pool).get(id).await?;
        if let Some(product) = &product {
            self.inner
                .cache
                .insert(key, CacheValue::Product(Box::new(product.clone())))
                .await;
        }

        Ok(product)
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    pub async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            return Ok(categories);
        }

        let categories = CategoryRepository::new(&self.inner.pool).list().await?;
        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(categories.clone()),
            )
            .await;

        Ok(categories)
    }

    /// Get a category by its URL handle. Misses are not cached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying query fails.
    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let key = CacheKey::Category(slug.to_owned());
        if let Some(CacheValue::Category(category)) = self.inner.cache.get(&key).await {
            return Ok(Some(*category));
        }

        let category = CategoryRepository::new(&self.inner.pool)
            .get_by_slug(slug)
            .await?;
        if let Some(category) = &category {
            self.inner
                .cache
                .insert(key, CacheValue::Category(Box::new(category.clone())))
                .await;
        }

        Ok(category)
    }

    /// Drop every cached entry. Called after admin catalog mutations.
    pub fn invalidate(&self) {
        self.inner.cache.invalidate_all();
    }
}
