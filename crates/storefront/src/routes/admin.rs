//! Admin route handlers.
//!
//! Every handler requires an admin session. Catalog mutations invalidate the
//! catalog cache so storefront reads pick up the change immediately.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use lavibaby_core::ProductId;

use crate::db::products::ProductRepository;
use crate::db::settings::SettingsRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::product::ProductInput;
use crate::models::settings::SiteSettings;
use crate::routes::catalog::ProductView;
use crate::state::AppState;

/// Replace the site settings document.
#[instrument(skip_all)]
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>> {
    SettingsRepository::new(state.pool())
        .set_site_settings(&settings)
        .await?;

    Ok(Json(settings))
}

/// Create a product.
#[instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductView>> {
    let product = ProductRepository::new(state.pool()).insert(&input).await?;
    state.catalog().invalidate();

    Ok(Json(ProductView::from(&product)))
}

/// Replace a product.
#[instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductView>> {
    let product = ProductRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    state.catalog().invalidate();

    Ok(Json(ProductView::from(&product)))
}

/// Delete a product.
#[instrument(skip_all)]
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    state.catalog().invalidate();

    Ok(StatusCode::NO_CONTENT)
}
