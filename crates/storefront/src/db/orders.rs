//! Order repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use uuid::Uuid;

use lavibaby_core::{
    CurrencyCode, OrderId, OrderItemId, OrderStatus, Price, ProductId, Size, UserId,
};

use super::RepositoryError;
use crate::cart::CartLine;
use crate::models::order::{Order, OrderItem, ShippingAddress};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    total_amount: Decimal,
    status: String,
    shipping_address: JsonValue,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: Uuid,
    order_id: Uuid,
    product_id: Uuid,
    quantity: i64,
    price_at_purchase: Decimal,
    size: String,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Result<Order, RepositoryError> {
        let status: OrderStatus = self.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;

        let shipping_address: ShippingAddress = serde_json::from_value(self.shipping_address)
            .map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid shipping address in database: {e}"
                ))
            })?;

        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            total: Price::new(self.total_amount, CurrencyCode::BRL),
            status,
            shipping_address,
            created_at: self.created_at,
            items,
        })
    }
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(row.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "invalid order item quantity in database: {}",
                row.quantity
            ))
        })?;

        Ok(Self {
            id: OrderItemId::new(row.id),
            product_id: ProductId::new(row.product_id),
            quantity,
            price_at_purchase: Price::new(row.price_at_purchase, CurrencyCode::BRL),
            size: Size::new(row.size),
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Capture an order from cart lines.
    ///
    /// One transaction: the order row, then one row per cart line with the
    /// captured price. The order is written as `completed` - there is no
    /// payment gateway step.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; nothing is
    /// written in that case.
    pub async fn create(
        &self,
        user_id: UserId,
        address: &ShippingAddress,
        lines: &[CartLine],
    ) -> Result<Order, RepositoryError> {
        let total: Decimal = lines.iter().map(|line| line.line_total().amount).sum();
        let address_value = serde_json::to_value(address).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable shipping address: {e}"))
        })?;

        let mut tx = self.pool.begin().await?;

        let order_row: OrderRow = sqlx::query_as(
            "INSERT INTO orders (user_id, total_amount, status, shipping_address) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, total_amount, status, shipping_address, created_at",
        )
        .bind(user_id)
        .bind(total)
        .bind(OrderStatus::Completed.as_str())
        .bind(address_value)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item_row: OrderItemRow = sqlx::query_as(
                "INSERT INTO order_items (order_id, product_id, quantity, price_at_purchase, size) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING id, order_id, product_id, quantity, price_at_purchase, size",
            )
            .bind(order_row.id)
            .bind(line.product.id)
            .bind(i64::from(line.quantity))
            .bind(line.product.price.amount)
            .bind(line.size.as_str())
            .fetch_one(&mut *tx)
            .await?;

            items.push(OrderItem::try_from(item_row)?);
        }

        tx.commit().await?;

        order_row.into_order(items)
    }

    /// List a user's orders with their items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails and
    /// `RepositoryError::DataCorruption` if stored rows fail validation.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let order_rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT id, user_id, total_amount, status, shipping_address, created_at \
             FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        let order_ids: Vec<Uuid> = order_rows.iter().map(|row| row.id).collect();
        let item_rows: Vec<OrderItemRow> = sqlx::query_as(
            "SELECT id, order_id, product_id, quantity, price_at_purchase, size \
             FROM order_items WHERE order_id = ANY($1) ORDER BY created_at",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut items_by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let order_id = row.order_id;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(OrderItem::try_from(row)?);
        }

        order_rows
            .into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect()
    }
}
