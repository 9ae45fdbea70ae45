//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lavibaby_core::{OrderId, OrderItemId, OrderStatus, Price, ProductId, Size, UserId};

/// A captured order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// Total amount at the cart's captured prices.
    pub total: Price,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Shipping destination.
    pub shipping_address: ShippingAddress,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Ordered items.
    pub items: Vec<OrderItem>,
}

/// One row of an order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    /// Unique item ID.
    pub id: OrderItemId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price captured when the product entered the cart.
    pub price_at_purchase: Price,
    /// Chosen size label.
    pub size: Size,
}

impl OrderItem {
    /// Captured unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price_at_purchase.times(self.quantity)
    }
}

/// Shipping destination, stored as a JSONB document on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}
