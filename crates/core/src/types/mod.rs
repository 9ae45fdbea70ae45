//! Newtype wrappers for type-safe domain values.
//!
//! - [`id`] - UUID-backed entity IDs via the [`define_id!`](crate::define_id) macro
//! - [`price`] - Decimal money amounts with currency
//! - [`email`] - Validated email addresses
//! - [`size`] - Garment size labels with the one-size sentinel
//! - [`status`] - Order lifecycle status

pub mod email;
pub mod id;
pub mod price;
pub mod size;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{CategoryId, OrderId, OrderItemId, ProductId, UserId};
pub use price::{CurrencyCode, Price};
pub use size::Size;
pub use status::{OrderStatus, OrderStatusParseError};
