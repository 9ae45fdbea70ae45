//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database probe)
//!
//! # Catalog
//! GET  /products               - Product listing (?category=<id> to filter)
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category listing
//! GET  /categories/{slug}      - Category detail
//!
//! # Cart (session-held)
//! GET  /cart                   - Current cart
//! POST /cart/add               - Add item (merges by product+size)
//! POST /cart/update            - Set quantity (0 removes the line)
//! POST /cart/remove            - Remove item
//! GET  /cart/count             - Item count badge
//!
//! # Checkout
//! POST /checkout               - Capture order, clear cart (requires auth)
//! GET  /account/orders         - Order history (requires auth)
//!
//! # Auth (pass-through to the hosted provider)
//! POST /auth/register          - Create account
//! POST /auth/login             - Password login
//! POST /auth/logout            - End session
//! GET  /auth/me                - Current user
//!
//! # Settings
//! GET  /settings               - Public site settings
//!
//! # Admin (requires admin role)
//! PUT    /admin/settings       - Replace site settings
//! POST   /admin/products       - Create product
//! PUT    /admin/products/{id}  - Replace product
//! DELETE /admin/products/{id}  - Delete product
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod settings;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::show_product))
        .route("/categories", get(catalog::list_categories))
        .route("/categories/{slug}", get(catalog::show_category))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", put(admin::update_settings))
        .route("/products", post(admin::create_product))
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .merge(catalog_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(orders::checkout))
        .route("/account/orders", get(orders::list))
        .route("/settings", get(settings::show))
        .nest("/admin", admin_routes())
        .layer(api_rate_limiter());

    // Stricter limits on credential endpoints
    let auth = auth_routes().layer(auth_rate_limiter());

    Router::new().merge(api).nest("/auth", auth)
}
