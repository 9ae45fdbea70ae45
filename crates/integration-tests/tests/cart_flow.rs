//! Integration tests for the cart API.
//!
//! These tests require:
//! - A running storefront (cargo run -p lavibaby-storefront)
//! - A migrated, seeded catalog (lv-cli migrate && lv-cli seed)
//!
//! Run with: cargo test -p lavibaby-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the storefront API (configurable via environment).
fn base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client with a cookie jar, so the session (and with it the cart)
/// survives across requests.
fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Test helper: Pick a product id from the seeded catalog.
async fn first_product_id(client: &Client) -> String {
    let base_url = base_url();
    let products: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse products");

    products
        .as_array()
        .and_then(|items| items.first())
        .and_then(|product| product["id"].as_str())
        .expect("Seeded catalog should have at least one product")
        .to_string()
}

/// Test helper: Add a product to the session cart.
async fn add_to_cart(client: &Client, product_id: &str, size: &str, quantity: u32) -> Value {
    let base_url = base_url();
    let resp = client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({
            "product_id": product_id,
            "size": size,
            "quantity": quantity,
        }))
        .send()
        .await
        .expect("Failed to add to cart");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse cart view")
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_starts_empty() {
    let client = client();
    let base_url = base_url();

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart view");

    assert_eq!(cart["item_count"], 0);
    assert!(cart["items"].as_array().expect("items array").is_empty());
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_add_merges_duplicates() {
    let client = client();
    let product_id = first_product_id(&client).await;

    add_to_cart(&client, &product_id, "P", 2).await;
    let cart = add_to_cart(&client, &product_id, "P", 1).await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(cart["item_count"], 3);
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_sizes_stay_distinct() {
    let client = client();
    let product_id = first_product_id(&client).await;

    add_to_cart(&client, &product_id, "P", 1).await;
    let cart = add_to_cart(&client, &product_id, "M", 1).await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);
    assert_eq!(cart["item_count"], 2);
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_update_to_zero_removes_the_line() {
    let client = client();
    let base_url = base_url();
    let product_id = first_product_id(&client).await;

    add_to_cart(&client, &product_id, "G", 2).await;

    let resp = client
        .post(format!("{base_url}/cart/update"))
        .json(&json!({
            "product_id": product_id,
            "size": "G",
            "quantity": 0,
        }))
        .send()
        .await
        .expect("Failed to update cart");

    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("Failed to parse cart view");
    assert_eq!(cart["item_count"], 0);
    assert!(cart["items"].as_array().expect("items array").is_empty());
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_remove_unknown_key_is_a_noop() {
    let client = client();
    let base_url = base_url();
    let product_id = first_product_id(&client).await;

    add_to_cart(&client, &product_id, "P", 2).await;

    // Same product, different size: nothing should change
    let resp = client
        .post(format!("{base_url}/cart/remove"))
        .json(&json!({
            "product_id": product_id,
            "size": "GG",
        }))
        .send()
        .await
        .expect("Failed to remove from cart");

    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("Failed to parse cart view");
    assert_eq!(cart["item_count"], 2);
    assert_eq!(cart["items"].as_array().expect("items array").len(), 1);
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_survives_across_requests() {
    let client = client();
    let base_url = base_url();
    let product_id = first_product_id(&client).await;

    add_to_cart(&client, &product_id, "P", 2).await;

    // Fresh GETs on the same session see the persisted cart
    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart view");
    assert_eq!(cart["item_count"], 2);

    let count: Value = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get cart count")
        .json()
        .await
        .expect("Failed to parse count view");
    assert_eq!(count["count"], 2);
}

#[tokio::test]
#[ignore = "Requires a running storefront with a seeded catalog"]
async fn cart_add_unknown_product_is_404() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({
            "product_id": "00000000-0000-0000-0000-000000000000",
            "quantity": 1,
        }))
        .send()
        .await
        .expect("Failed to call cart add");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
