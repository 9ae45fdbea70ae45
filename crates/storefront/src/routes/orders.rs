//! Checkout and order history handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use lavibaby_core::{OrderId, OrderStatus, ProductId};

use crate::cart::store::CartStore;
use crate::db::orders::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::order::{Order, OrderItem, ShippingAddress};
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: ShippingAddress,
}

/// Order display data.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total: String,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

/// Order item display data.
#[derive(Debug, Serialize)]
pub struct OrderItemView {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: String,
    pub price_at_purchase: String,
    pub line_total: String,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            size: item.size.as_str().to_owned(),
            price_at_purchase: item.price_at_purchase.display(),
            line_total: item.line_total().display(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total: order.total.display(),
            shipping_address: order.shipping_address.clone(),
            created_at: order.created_at,
            items: order.items.iter().map(OrderItemView::from).collect(),
        }
    }
}

/// Capture an order from the session cart, then clear the cart.
///
/// The cart's captured prices are what get written; there is no re-pricing
/// or stock validation at this point.
#[instrument(skip_all)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<OrderView>> {
    let mut store = CartStore::load(session).await;

    if store.cart().is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_owned()));
    }

    let order = OrderRepository::new(state.pool())
        .create(user.id, &body.shipping_address, store.cart().lines())
        .await?;

    // The order is in; an emptied cart is what the frontend shows next.
    store.clear().await;

    Ok(Json(OrderView::from(&order)))
}

/// List the caller's orders, newest first.
#[instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<OrderView>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(orders.iter().map(OrderView::from).collect()))
}
