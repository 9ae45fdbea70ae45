//! Session-backed cart persistence.
//!
//! The session carries the full cart snapshot under a single fixed key, the
//! way the frontend kept it in browser storage. Hydration is best-effort: a
//! value that fails to deserialize is dropped and replaced by an empty cart.
//! Every mutation rewrites the full snapshot; writes are fire-and-forget -
//! a failed write is logged, never surfaced to the caller.

use tower_sessions::Session;

use lavibaby_core::Size;

use super::{Cart, CartLine, LineKey, ProductSnapshot};

/// Session key for the serialized cart snapshot.
pub const CART_KEY: &str = "lavibaby_cart";

/// The cart plus the session slot it persists into.
///
/// All mutations go through this type so that every change is followed by a
/// snapshot write. The visibility flag is deliberately not written - it is
/// not part of the persisted contract.
#[derive(Debug, Clone)]
pub struct CartStore {
    session: Session,
    cart: Cart,
}

impl CartStore {
    /// Hydrate the cart from the session.
    ///
    /// A missing snapshot is an empty cart. A corrupt snapshot is discarded
    /// from the session and also treated as empty.
    pub async fn load(session: Session) -> Self {
        let cart = match session.get::<Vec<CartLine>>(CART_KEY).await {
            Ok(Some(lines)) => Cart::from_lines(lines),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("discarding unreadable cart snapshot: {e}");
                let _ = session.remove::<serde_json::Value>(CART_KEY).await;
                Cart::new()
            }
        };

        Self { session, cart }
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add units of a product, merging by `(product, size)`.
    pub async fn add(&mut self, product: ProductSnapshot, size: Size, quantity: u32) {
        self.cart.add(product, size, quantity);
        self.save().await;
    }

    /// Set a line's quantity; zero evicts the line.
    pub async fn set_quantity(&mut self, key: &LineKey, quantity: u32) {
        self.cart.set_quantity(key, quantity);
        self.save().await;
    }

    /// Delete a line.
    pub async fn remove(&mut self, key: &LineKey) {
        self.cart.remove(key);
        self.save().await;
    }

    /// Empty the cart. Called after a completed order.
    pub async fn clear(&mut self) {
        self.cart.clear();
        self.save().await;
    }

    /// Show the cart panel. In-memory state only, nothing is written.
    pub fn open(&mut self) {
        self.cart.open();
    }

    /// Hide the cart panel. In-memory state only, nothing is written.
    pub fn close(&mut self) {
        self.cart.close();
    }

    /// Write the full snapshot back to the session slot.
    async fn save(&self) {
        if let Err(e) = self.session.insert(CART_KEY, self.cart.lines()).await {
            tracing::warn!("failed to persist cart snapshot: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};
    use uuid::Uuid;

    use lavibaby_core::{CategoryId, CurrencyCode, Price, ProductId, Size};

    use super::*;

    fn test_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn snapshot(n: u128, minor_units: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(Uuid::from_u128(n)),
            name: format!("Produto {n}"),
            price: Price::from_minor_units(minor_units, CurrencyCode::BRL),
            image_url: None,
            category_id: CategoryId::new(Uuid::from_u128(1000 + n)),
        }
    }

    #[tokio::test]
    async fn fresh_session_loads_empty_cart() {
        let store = CartStore::load(test_session()).await;
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn mutations_roundtrip_through_the_session() {
        let session = test_session();

        let mut store = CartStore::load(session.clone()).await;
        store.add(snapshot(1, 4990), Size::new("P"), 2).await;
        store.add(snapshot(2, 2950), Size::one_size(), 1).await;
        let written = store.cart().clone();
        drop(store);

        let rehydrated = CartStore::load(session).await;
        assert_eq!(rehydrated.cart().lines(), written.lines());
        assert_eq!(rehydrated.cart().total_items(), 3);
    }

    #[tokio::test]
    async fn set_quantity_zero_persists_the_eviction() {
        let session = test_session();

        let mut store = CartStore::load(session.clone()).await;
        store.add(snapshot(1, 4990), Size::new("P"), 2).await;
        let key = store.cart().lines().first().unwrap().key();
        store.set_quantity(&key, 0).await;
        drop(store);

        let rehydrated = CartStore::load(session).await;
        assert!(rehydrated.cart().is_empty());
    }

    #[tokio::test]
    async fn clear_persists_an_empty_snapshot() {
        let session = test_session();

        let mut store = CartStore::load(session.clone()).await;
        store.add(snapshot(1, 4990), Size::new("P"), 2).await;
        store.clear().await;
        drop(store);

        let rehydrated = CartStore::load(session).await;
        assert!(rehydrated.cart().is_empty());
    }

    #[tokio::test]
    async fn corrupt_snapshot_resets_to_empty() {
        let session = test_session();
        session.insert(CART_KEY, "definitely not a cart").await.unwrap();

        let store = CartStore::load(session.clone()).await;
        assert!(store.cart().is_empty());

        // The bad value is gone; the next load starts clean as well.
        let again = CartStore::load(session).await;
        assert!(again.cart().is_empty());
    }

    #[tokio::test]
    async fn visibility_is_not_persisted() {
        let session = test_session();

        let mut store = CartStore::load(session.clone()).await;
        store.add(snapshot(1, 4990), Size::new("P"), 1).await;
        store.open();
        assert!(store.cart().is_open());
        drop(store);

        let rehydrated = CartStore::load(session).await;
        assert!(!rehydrated.cart().is_open());
        assert_eq!(rehydrated.cart().total_items(), 1);
    }
}
