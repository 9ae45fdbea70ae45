//! Integration tests for checkout.
//!
//! These tests require:
//! - A running storefront (cargo run -p lavibaby-storefront)
//! - A migrated, seeded catalog and a reachable auth provider
//!
//! Run with: cargo test -p lavibaby-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

fn base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

fn shipping_address() -> Value {
    json!({
        "shipping_address": {
            "street": "Rua das Flores, 123",
            "city": "São Paulo",
            "state": "SP",
            "zip": "01000-000",
            "country": "Brasil",
        }
    })
}

async fn register(client: &Client) {
    let base_url = base_url();
    let email = format!("e2e-{}@lavibaby-tests.com.br", Uuid::new_v4());

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "email": email,
            "password": "curious-otter-battery-staple-9",
            "name": "Compradora",
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);
}

async fn add_first_product(client: &Client, quantity: u32) {
    let base_url = base_url();
    let products: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse products");
    let product_id = products
        .as_array()
        .and_then(|items| items.first())
        .and_then(|product| product["id"].as_str())
        .expect("Seeded catalog should have at least one product")
        .to_string();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({
            "product_id": product_id,
            "size": "P",
            "quantity": quantity,
        }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running storefront, seeded catalog and auth provider"]
async fn checkout_requires_authentication() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/checkout"))
        .json(&shipping_address())
        .send()
        .await
        .expect("Failed to call checkout");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires a running storefront, seeded catalog and auth provider"]
async fn checkout_rejects_an_empty_cart() {
    let client = client();
    let base_url = base_url();

    register(&client).await;

    let resp = client
        .post(format!("{base_url}/checkout"))
        .json(&shipping_address())
        .send()
        .await
        .expect("Failed to call checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires a running storefront, seeded catalog and auth provider"]
async fn checkout_captures_the_order_and_clears_the_cart() {
    let client = client();
    let base_url = base_url();

    register(&client).await;
    add_first_product(&client, 2).await;

    let resp = client
        .post(format!("{base_url}/checkout"))
        .json(&shipping_address())
        .send()
        .await
        .expect("Failed to call checkout");
    assert_eq!(resp.status(), StatusCode::OK);

    let order: Value = resp.json().await.expect("Failed to parse order view");
    assert_eq!(order["status"], "completed");
    assert_eq!(order["items"].as_array().expect("items array").len(), 1);
    assert_eq!(order["items"][0]["quantity"], 2);

    // The cart is cleared after the order lands
    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart view");
    assert_eq!(cart["item_count"], 0);

    // And the order shows up in the history
    let orders: Value = client
        .get(format!("{base_url}/account/orders"))
        .send()
        .await
        .expect("Failed to list orders")
        .json()
        .await
        .expect("Failed to parse orders");
    assert_eq!(orders.as_array().expect("orders array").len(), 1);
}
