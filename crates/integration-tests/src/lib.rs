//! Integration tests for LaviBaby.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations and seed the demo catalog
//! cargo run -p lavibaby-cli -- migrate
//! cargo run -p lavibaby-cli -- seed
//!
//! # Start the storefront
//! cargo run -p lavibaby-storefront
//!
//! # Run the end-to-end tests
//! cargo test -p lavibaby-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Session cart behavior over HTTP
//! - `auth_flow` - Registration, login, logout against the hosted provider
//! - `checkout` - Order capture and cart clearing
//!
//! All tests are `#[ignore]`d by default because they need a running
//! storefront with a reachable hosted database.
