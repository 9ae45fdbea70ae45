//! Cart route handlers.
//!
//! Every mutation hydrates the session cart, applies the operation and
//! returns the updated cart view; the snapshot write happens inside the
//! store. Missing line keys are silent no-ops, matching the cart contract.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use lavibaby_core::{ProductId, Size};

use crate::cart::store::CartStore;
use crate::cart::{Cart, CartLine, LineKey, ProductSnapshot};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image_url: Option<String>,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            size: line.size.as_str().to_owned(),
            quantity: line.quantity,
            unit_price: line.product.price.display(),
            line_total: line.line_total().display(),
            image_url: line.product.image_url.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().display(),
            item_count: cart.total_items(),
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Clone, Serialize)]
pub struct CartCountView {
    pub count: u64,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub quantity: Option<u32>,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
    pub size: Option<String>,
}

fn size_from(label: Option<String>) -> Size {
    label.map_or_else(Size::one_size, Size::new)
}

/// Show the current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Json<CartView> {
    let store = CartStore::load(session).await;
    Json(CartView::from(store.cart()))
}

/// Add an item to the cart.
///
/// The product is read from the catalog and snapshotted into the cart line;
/// stock is not checked here - that stays a display-layer concern.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let quantity = body.quantity.unwrap_or(1).max(1);

    let product = state
        .catalog()
        .product(body.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", body.product_id)))?;

    let mut store = CartStore::load(session).await;
    store
        .add(ProductSnapshot::from(&product), size_from(body.size), quantity)
        .await;

    Ok(Json(CartView::from(store.cart())))
}

/// Set an item's quantity. Zero (or below) removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Json(body): Json<UpdateCartRequest>) -> Json<CartView> {
    // Negative quantities clamp to zero, which evicts the line.
    let quantity = u32::try_from(body.quantity.max(0)).unwrap_or(u32::MAX);
    let key = LineKey {
        product_id: body.product_id,
        size: size_from(body.size),
    };

    let mut store = CartStore::load(session).await;
    store.set_quantity(&key, quantity).await;

    Json(CartView::from(store.cart()))
}

/// Remove an item from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Json(body): Json<RemoveFromCartRequest>) -> Json<CartView> {
    let key = LineKey {
        product_id: body.product_id,
        size: size_from(body.size),
    };

    let mut store = CartStore::load(session).await;
    store.remove(&key).await;

    Json(CartView::from(store.cart()))
}

/// Get the cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<CartCountView> {
    let store = CartStore::load(session).await;
    Json(CartCountView {
        count: store.cart().total_items(),
    })
}
