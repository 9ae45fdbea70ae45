//! Shopping cart domain logic.
//!
//! The cart is a plain, synchronous state machine over an insertion-ordered
//! list of lines. Each line is identified by its [`LineKey`] - the
//! `(product, size)` pair - and repeated adds merge into the existing line
//! instead of appending a duplicate row. A line whose quantity reaches zero
//! is removed, never kept as an empty row.
//!
//! Persistence lives in [`store`]; the cart itself performs no I/O and never
//! awaits.

pub mod store;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lavibaby_core::{CategoryId, CurrencyCode, Price, ProductId, Size};

use crate::models::product::Product;

/// Identity of a cart line: the merge key.
///
/// Two adds merge if and only if both the product and the size label match
/// exactly; the same product in two sizes yields two lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Size,
}

/// Catalog data captured when a product enters the cart.
///
/// Totals use this captured price, not a live catalog read: a later catalog
/// price change does not move an existing cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub category_id: CategoryId,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.primary_image().map(str::to_owned),
            category_id: product.category_id,
        }
    }
}

/// One cart row: a product snapshot, a size and a quantity.
///
/// Invariant: `quantity >= 1` while the line is held by a [`Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub size: Size,
    pub quantity: u32,
}

impl CartLine {
    /// The merge key for this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id,
            size: self.size.clone(),
        }
    }

    /// Captured unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The cart: an ordered line collection plus the panel visibility flag.
///
/// Lines keep insertion order for display. The visibility flag is in-memory
/// state only and is excluded from persisted snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
        }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// Re-applies the merge and eviction rules, so a snapshot containing
    /// duplicate keys or zero-quantity rows still hydrates into a valid cart.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity > 0 {
                cart.add(line.product, line.size, line.quantity);
            }
        }
        cart
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, key: &LineKey) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.key() == *key)
    }

    /// Add `quantity` units of a product in a given size.
    ///
    /// Merges into the existing line for the same `(product, size)` pair;
    /// repeated adds accumulate rather than overwrite. Quantity must be
    /// positive - callers clamp before getting here.
    pub fn add(&mut self, product: ProductSnapshot, size: Size, quantity: u32) {
        let key = LineKey {
            product_id: product.id,
            size: size.clone(),
        };

        if let Some(line) = self.line_mut(&key) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product,
                size,
                quantity,
            });
        }
    }

    /// Set a line's quantity to an exact value (replace, not additive).
    ///
    /// Zero evicts the line - a cart never holds zero-quantity rows.
    /// Unknown keys are a silent no-op.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: u32) {
        if quantity == 0 {
            self.remove(key);
            return;
        }

        if let Some(line) = self.line_mut(key) {
            line.quantity = quantity;
        }
    }

    /// Delete the line with the given key, if present.
    pub fn remove(&mut self, key: &LineKey) {
        self.lines.retain(|line| line.key() != *key);
    }

    /// Empty the cart. Used after a completed order.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines. Recomputed on demand.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of captured unit prices times quantities.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        // Single-currency catalog: the first line fixes the currency.
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| {
                line.product.price.currency_code
            });
        let amount: Decimal = self.lines.iter().map(|line| line.line_total().amount).sum();
        Price::new(amount, currency)
    }

    /// Show the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn snapshot(n: u128, minor_units: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(Uuid::from_u128(n)),
            name: format!("Produto {n}"),
            price: Price::from_minor_units(minor_units, CurrencyCode::BRL),
            image_url: None,
            category_id: CategoryId::new(Uuid::from_u128(1000 + n)),
        }
    }

    fn key(n: u128, size: &str) -> LineKey {
        LineKey {
            product_id: ProductId::new(Uuid::from_u128(n)),
            size: Size::new(size),
        }
    }

    #[test]
    fn add_appends_new_line() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.subtotal().amount, Decimal::new(9980, 2));
    }

    #[test]
    fn add_merges_same_product_and_size() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        cart.add(snapshot(1, 4990), Size::new("P"), 1);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal().amount, Decimal::new(14970, 2));
    }

    #[test]
    fn add_same_product_different_size_stays_distinct() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 1);
        cart.add(snapshot(1, 4990), Size::new("M"), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn set_quantity_replaces_not_adds() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        cart.set_quantity(&key(1, "P"), 5);

        assert_eq!(cart.lines().first().unwrap().quantity, 5);
    }

    #[test]
    fn set_quantity_zero_evicts_line() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        cart.add(snapshot(2, 2950), Size::one_size(), 1);

        cart.set_quantity(&key(1, "P"), 0);

        assert_eq!(cart.lines().len(), 1);
        assert!(cart.lines().iter().all(|line| line.key() != key(1, "P")));
    }

    #[test]
    fn set_quantity_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);

        let before = cart.clone();
        cart.set_quantity(&key(9, "G"), 4);

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_deletes_only_matching_line() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 1);
        cart.add(snapshot(1, 4990), Size::new("M"), 1);

        cart.remove(&key(1, "P"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().size, Size::new("M"));
    }

    #[test]
    fn remove_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 1);

        let before = cart.clone();
        cart.remove(&key(2, "P"));

        assert_eq!(cart, before);
    }

    #[test]
    fn clear_empties_regardless_of_size() {
        let mut cart = Cart::new();
        for n in 0..10 {
            cart.add(snapshot(n, 1000), Size::one_size(), 3);
        }

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal().amount, Decimal::ZERO);
    }

    #[test]
    fn subtotal_uses_captured_price() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        // Same product re-added after a catalog price change: the merge
        // keeps the originally captured snapshot.
        cart.add(snapshot(1, 5990), Size::new("P"), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.subtotal().amount, Decimal::new(14970, 2));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(snapshot(3, 100), Size::one_size(), 1);
        cart.add(snapshot(1, 100), Size::one_size(), 1);
        cart.add(snapshot(2, 100), Size::one_size(), 1);

        let ids: Vec<ProductId> = cart.lines().iter().map(|line| line.product.id).collect();
        assert_eq!(
            ids,
            vec![
                ProductId::new(Uuid::from_u128(3)),
                ProductId::new(Uuid::from_u128(1)),
                ProductId::new(Uuid::from_u128(2)),
            ]
        );
    }

    #[test]
    fn snapshot_roundtrip_reproduces_cart() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        cart.add(snapshot(2, 2950), Size::one_size(), 1);
        cart.add(snapshot(1, 4990), Size::new("M"), 4);

        let json = serde_json::to_string(cart.lines()).unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        let rehydrated = Cart::from_lines(lines);

        assert_eq!(rehydrated.lines(), cart.lines());
        assert_eq!(rehydrated.total_items(), cart.total_items());
        assert_eq!(rehydrated.subtotal(), cart.subtotal());
    }

    #[test]
    fn from_lines_reapplies_invariants() {
        let zombie = CartLine {
            product: snapshot(1, 4990),
            size: Size::new("P"),
            quantity: 0,
        };
        let dup_a = CartLine {
            product: snapshot(2, 1000),
            size: Size::new("M"),
            quantity: 1,
        };
        let dup_b = CartLine {
            product: snapshot(2, 1000),
            size: Size::new("M"),
            quantity: 2,
        };

        let cart = Cart::from_lines(vec![zombie, dup_a, dup_b]);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 3);
    }

    #[test]
    fn visibility_flag_toggles() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());

        cart.open();
        assert!(cart.is_open());

        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn checkout_scenario() {
        let mut cart = Cart::new();
        cart.add(snapshot(1, 4990), Size::new("P"), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.subtotal().amount, Decimal::new(9980, 2));

        cart.add(snapshot(1, 4990), Size::new("P"), 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 3);

        cart.set_quantity(&key(1, "P"), 0);
        assert!(cart.is_empty());
    }
}
