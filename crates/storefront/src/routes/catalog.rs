//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use lavibaby_core::{CategoryId, ProductId};

use crate::error::{AppError, Result};
use crate::models::product::{Category, Product};
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: String,
    pub image_urls: Vec<String>,
    pub category_id: CategoryId,
    pub stock: i32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_urls: product.image_urls.clone(),
            category_id: product.category_id,
            stock: product.stock,
        }
    }
}

/// Category display data.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            image_url: category.image_url.clone(),
        }
    }
}

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<CategoryId>,
}

/// List products, optionally filtered by category.
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let products = match query.category {
        Some(category_id) => state.catalog().products_by_category(category_id).await?,
        None => state.catalog().products().await?,
    };

    Ok(Json(products.iter().map(ProductView::from).collect()))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = state
        .catalog()
        .product(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductView::from(&product)))
}

/// List all categories.
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryView>>> {
    let categories = state.catalog().categories().await?;
    Ok(Json(categories.iter().map(CategoryView::from).collect()))
}

/// Show a single category by its URL handle.
#[instrument(skip(state))]
pub async fn show_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryView>> {
    let category = state
        .catalog()
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {slug}")))?;

    Ok(Json(CategoryView::from(&category)))
}
