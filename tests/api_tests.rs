use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use shopfront::config::Config;
use shopfront::infrastructure::store::Store;
use shopfront::{create_router, AppState};

fn test_server() -> TestServer {
    let config = Config::default();
    let state = AppState::new(Arc::new(Store::new()), &config);
    TestServer::new(create_router(state, &config.http)).unwrap()
}

fn customer_header(customer: Uuid) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-customer-id"),
        HeaderValue::from_str(&customer.to_string()).unwrap(),
    )
}

async fn create_product(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/products").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

async fn seed_catalog(server: &TestServer) {
    create_product(
        server,
        json!({
            "name": "Red Shirt",
            "category": "Shirts",
            "price": 1200.0,
            "originalPrice": 1500.0,
            "image": "/uploads/red_shirt.jpg",
            "colors": ["Red"],
            "badge": "Sale"
        }),
    )
    .await;
    create_product(
        server,
        json!({
            "name": "Oxford Shirt",
            "category": "shirts",
            "price": 1400.0,
            "image": "/uploads/oxford.jpg",
            "badge": "New"
        }),
    )
    .await;
    create_product(
        server,
        json!({
            "name": "Linen Kurta",
            "category": "Kurtas",
            "price": 900.0,
            "description": "Breathable red linen",
            "image": "/uploads/kurta.jpg",
            "badge": "New",
            "model3DUrl": "/models/kurta.glb"
        }),
    )
    .await;
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_and_health() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["message"].is_string());

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["products"], 0);
}

#[tokio::test]
async fn test_product_listing_applies_filter() {
    let server = test_server();
    seed_catalog(&server).await;

    let body: Value = server.get("/api/products").await.json();
    assert_eq!(names(&body), vec!["Red Shirt", "Oxford Shirt", "Linen Kurta"]);

    let body: Value = server.get("/api/products?category=SHIRTS").await.json();
    assert_eq!(names(&body), vec!["Red Shirt", "Oxford Shirt"]);

    let body: Value = server.get("/api/products?category=new").await.json();
    assert_eq!(names(&body), vec!["Oxford Shirt", "Linen Kurta"]);

    let body: Value = server.get("/api/products?category=new&search=red").await.json();
    assert_eq!(names(&body), vec!["Red Shirt", "Linen Kurta"]);

    let body: Value = server.get("/api/products?category=all&search=").await.json();
    assert_eq!(names(&body).len(), 3);
}

#[tokio::test]
async fn test_product_crud() {
    let server = test_server();
    let product = create_product(
        &server,
        json!({
            "name": "  Denim Jacket ",
            "category": "Jackets",
            "price": 2999.0,
            "image": "/uploads/denim.jpg"
        }),
    )
    .await;
    assert_eq!(product["name"], "Denim Jacket");
    assert_eq!(product["colors"], json!([]));
    let id = product["id"].as_str().unwrap().to_string();

    let response = server.get(&format!("/api/products/{}", id)).await;
    response.assert_status_ok();

    let response = server
        .put(&format!("/api/products/{}", id))
        .json(&json!({ "price": 2499.0, "badge": "Trending" }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["data"]["price"], 2499.0);
    assert_eq!(updated["data"]["badge"], "Trending");
    assert_eq!(updated["data"]["name"], "Denim Jacket");

    let response = server
        .put(&format!("/api/products/{}", id))
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "No update data provided");

    server
        .delete(&format!("/api/products/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/products/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/products/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_validation() {
    let server = test_server();
    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "",
            "category": "Shirts",
            "price": -1.0,
            "image": "/uploads/x.jpg"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(
        body["message"],
        "Name must be between 1 and 200 characters, Price must not be negative"
    );
}

#[tokio::test]
async fn test_coupon_lifecycle_and_status() {
    let server = test_server();

    let response = server
        .post("/api/coupons")
        .json(&json!({ "code": "welcome10", "type": "percentage", "value": 10.0 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let coupon: Value = response.json::<Value>()["data"].clone();
    assert_eq!(coupon["code"], "WELCOME10");
    assert_eq!(coupon["usedCount"], 0);

    server
        .post("/api/coupons")
        .json(&json!({ "code": "Welcome10", "type": "fixed", "value": 50.0 }))
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .post("/api/coupons")
        .json(&json!({ "code": "HUGE", "type": "percentage", "value": 150.0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/coupons")
        .json(&json!({
            "code": "OLD",
            "type": "fixed",
            "value": 100.0,
            "expiryDate": "2020-01-01T00:00:00Z",
            "usageLimit": 0
        }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/coupons")
        .json(&json!({ "code": "GONE", "type": "fixed", "value": 100.0, "usageLimit": 0 }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/api/coupons").await.json();
    let statuses: Vec<(String, String)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["code"].as_str().unwrap().to_string(),
                c["status"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("WELCOME10".to_string(), "active".to_string()),
            ("OLD".to_string(), "expired".to_string()),
            ("GONE".to_string(), "limitReached".to_string()),
        ]
    );

    let id = coupon["id"].as_str().unwrap();
    let response = server
        .put(&format!("/api/coupons/{}", id))
        .json(&json!({ "code": "old" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let response = server
        .put(&format!("/api/coupons/{}", id))
        .json(&json!({ "value": 120.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(&format!("/api/coupons/{}", id))
        .json(&json!({ "code": "welcome15", "value": 15.0 }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["data"]["code"], "WELCOME15");
    assert_eq!(updated["data"]["value"], 15.0);

    server
        .delete(&format!("/api/coupons/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/coupons/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_coupon_validate_endpoint() {
    let server = test_server();
    let (name, value) = customer_header(Uuid::new_v4());

    server
        .post("/api/coupons")
        .json(&json!({ "code": "BIG500", "type": "fixed", "value": 500.0, "minOrder": 3000.0 }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/coupons/validate")
        .json(&json!({ "code": "BIG500", "subtotal": 4000.0 }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/coupons/validate")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "code": "big500", "subtotal": 1000.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Minimum order of ₹3000 required"
    );

    let response = server
        .post("/api/coupons/validate")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "code": "nope", "subtotal": 1000.0 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Invalid coupon code");

    let response = server
        .post("/api/coupons/validate")
        .add_header(name, value)
        .json(&json!({ "code": "big500", "subtotal": 3000.0 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["code"], "BIG500");
}

#[tokio::test]
async fn test_cart_merges_and_updates_items() {
    let server = test_server();
    let product = create_product(
        &server,
        json!({ "name": "Cotton Tee", "category": "T-Shirts", "price": 499.0, "image": "/uploads/tee.jpg" }),
    )
    .await;
    let (name, value) = customer_header(Uuid::new_v4());

    server.get("/api/cart").await.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = server
        .get("/api/cart")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(body["data"]["items"], json!([]));

    let item = json!({
        "productId": product["id"],
        "selectedSize": "M",
        "selectedColor": "Black",
        "quantity": 1
    });
    server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&item)
        .await
        .assert_status_ok();
    let body: Value = server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&item)
        .await
        .json();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["name"], "Cotton Tee");
    let item_id = items[0]["id"].as_str().unwrap().to_string();

    let response = server
        .put(&format!("/api/cart/items/{}", item_id))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "quantity": 5 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["items"][0]["quantity"], 5);

    server
        .put(&format!("/api/cart/items/{}", item_id))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "quantity": 0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(&format!("/api/cart/items/{}", Uuid::new_v4()))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "quantity": 2 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Item not found in cart");

    let body: Value = server
        .delete(&format!("/api/cart/items/{}", item_id))
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(body["data"]["items"], json!([]));

    server
        .post("/api/cart/items")
        .add_header(name, value)
        .json(&json!({
            "productId": Uuid::new_v4(),
            "selectedSize": "M",
            "selectedColor": "Black",
            "quantity": 1
        }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hero_content_default_and_update() {
    let server = test_server();

    let body: Value = server.get("/api/content/hero").await.json();
    assert_eq!(body["data"]["type"], "image");
    assert_eq!(body["data"]["alt"], "Fashion Model");

    let response = server
        .post("/api/content/hero")
        .json(&json!({ "type": "video", "url": "/uploads/hero.mp4" }))
        .await;
    response.assert_status_ok();

    let body: Value = server.get("/api/content/hero").await.json();
    assert_eq!(body["data"]["type"], "video");
    assert_eq!(body["data"]["url"], "/uploads/hero.mp4");
    assert!(body["data"].get("alt").is_none());
}

#[tokio::test]
async fn test_order_checkout_flow() {
    let server = test_server();
    let customer = Uuid::new_v4();
    let (name, value) = customer_header(customer);

    let product = create_product(
        &server,
        json!({ "name": "Silk Saree", "category": "Sarees", "price": 1200.0, "image": "/uploads/saree.jpg" }),
    )
    .await;
    server
        .post("/api/coupons")
        .json(&json!({ "code": "SAVE10", "type": "percentage", "value": 10.0, "maxDiscount": 200.0 }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/orders/create")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "address": { "name": "Asha", "email": "asha@example.com" } }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Your cart is empty");

    server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "productId": product["id"],
            "selectedSize": "Free",
            "selectedColor": "Maroon",
            "quantity": 2
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/orders/create")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "couponCode": "save10",
            "address": { "name": "Asha", "email": "asha@example.com" }
        }))
        .await;
    response.assert_status_ok();
    let created: Value = response.json::<Value>()["data"].clone();
    assert_eq!(created["amount"], 2695.0);
    assert_eq!(created["currency"], "INR");
    assert_eq!(created["customerEmail"], "asha@example.com");
    let gateway_order_id = created["gatewayOrderId"].as_str().unwrap().to_string();
    assert!(gateway_order_id.starts_with("mock_order_"));
    let order_id = created["orderId"].as_str().unwrap().to_string();

    let order: Value = server
        .get(&format!("/api/orders/{}", order_id))
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(order["data"]["status"], "pending");
    assert_eq!(order["data"]["amountSubtotal"], 2400.0);
    assert_eq!(order["data"]["amountDiscount"], 200.0);
    assert_eq!(order["data"]["amountShipping"], 99.0);
    assert_eq!(order["data"]["amountTax"], 396.0);
    assert_eq!(order["data"]["couponCode"], "SAVE10");

    let (other_name, other_value) = customer_header(Uuid::new_v4());
    server
        .get(&format!("/api/orders/{}", order_id))
        .add_header(other_name, other_value)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post("/api/orders/verify")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "gatewayOrderId": "mock_order_forged",
            "paymentId": "pay_1",
            "signature": "sig",
            "orderId": order_id
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let verify = json!({
        "gatewayOrderId": gateway_order_id,
        "paymentId": "pay_1",
        "signature": "sig",
        "orderId": order_id
    });
    let response = server
        .post("/api/orders/verify")
        .add_header(name.clone(), value.clone())
        .json(&verify)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "paid");

    server
        .post("/api/orders/verify")
        .add_header(name.clone(), value.clone())
        .json(&verify)
        .await
        .assert_status_ok();

    let cart: Value = server
        .get("/api/cart")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(cart["data"]["items"], json!([]));

    let coupons: Value = server.get("/api/coupons").await.json();
    assert_eq!(coupons["data"][0]["usedCount"], 1);

    let orders: Value = server
        .get("/api/orders")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(orders["data"].as_array().unwrap().len(), 1);
    assert_eq!(orders["data"][0]["status"], "paid");
    assert_eq!(orders["data"][0]["paymentId"], "pay_1");
}

#[tokio::test]
async fn test_order_ignores_unusable_coupon() {
    let server = test_server();
    let (name, value) = customer_header(Uuid::new_v4());

    let product = create_product(
        &server,
        json!({ "name": "Wool Shawl", "category": "Shawls", "price": 6000.0, "image": "/uploads/shawl.jpg" }),
    )
    .await;
    server
        .post("/api/coupons")
        .json(&json!({
            "code": "EXPIRED",
            "type": "fixed",
            "value": 500.0,
            "expiryDate": "2021-06-30T00:00:00Z"
        }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "productId": product["id"],
            "selectedSize": "Free",
            "selectedColor": "Grey",
            "quantity": 1
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/orders/create")
        .add_header(name, value)
        .json(&json!({
            "couponCode": "EXPIRED",
            "address": { "name": "Ravi", "email": "ravi@example.com" }
        }))
        .await;
    response.assert_status_ok();
    // 6000 + 0 shipping + 1080 tax
    assert_eq!(response.json::<Value>()["data"]["amount"], 7080.0);
}

#[tokio::test]
async fn test_order_address_is_validated() {
    let server = test_server();
    let (name, value) = customer_header(Uuid::new_v4());

    let response = server
        .post("/api/orders/create")
        .add_header(name, value)
        .json(&json!({ "address": { "name": "Ravi", "email": "not-an-email" } }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid email format");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let server = test_server();

    let response = server
        .get("/api/products")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header(HeaderName::from_static("access-control-allow-origin")),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_product_update_null_clears_fields() {
    let server = test_server();
    seed_catalog(&server).await;

    let body: Value = server.get("/api/products?category=new").await.json();
    let kurta = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Linen Kurta")
        .unwrap()
        .clone();
    let id = kurta["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/products/{}", id))
        .json(&json!({ "badge": null, "description": null, "model3DUrl": null }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json::<Value>()["data"].clone();
    assert!(updated["badge"].is_null());
    assert!(updated["description"].is_null());
    assert!(updated["model3DUrl"].is_null());
    assert_eq!(updated["price"], 900.0);

    let body: Value = server.get("/api/products?category=new").await.json();
    assert_eq!(names(&body), vec!["Oxford Shirt"]);

    let body: Value = server.get("/api/products?search=breathable").await.json();
    assert!(names(&body).is_empty());

    let response = server
        .put(&format!("/api/products/{}", id))
        .json(&json!({ "originalPrice": -10.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Original price must not be negative"
    );
}

#[tokio::test]
async fn test_product_badge_none_means_no_badge() {
    let server = test_server();

    let product = create_product(
        &server,
        json!({ "name": "Plain Tee", "category": "T-Shirts", "price": 299.0, "image": "/uploads/plain.jpg", "badge": "none" }),
    )
    .await;
    assert!(product["badge"].is_null());

    let product = create_product(
        &server,
        json!({ "name": "Basic Tee", "category": "T-Shirts", "price": 199.0, "image": "/uploads/basic.jpg", "badge": "" }),
    )
    .await;
    assert!(product["badge"].is_null());

    server
        .post("/api/products")
        .json(&json!({ "name": "Odd Tee", "category": "T-Shirts", "price": 199.0, "image": "/uploads/odd.jpg", "badge": "Clearance" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_coupon_update_null_removes_expiry_and_limit() {
    let server = test_server();

    let response = server
        .post("/api/coupons")
        .json(&json!({
            "code": "LASTYEAR",
            "type": "fixed",
            "value": 100.0,
            "expiryDate": "2020-01-01T00:00:00Z"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let expired_id = response.json::<Value>()["data"]["id"].as_str().unwrap().to_string();

    let response = server
        .post("/api/coupons")
        .json(&json!({ "code": "SOLDOUT", "type": "fixed", "value": 100.0, "usageLimit": 0 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let limited_id = response.json::<Value>()["data"]["id"].as_str().unwrap().to_string();

    let body: Value = server.get(&format!("/api/coupons/{}", expired_id)).await.json();
    assert_eq!(body["data"]["status"], "expired");

    let response = server
        .put(&format!("/api/coupons/{}", expired_id))
        .json(&json!({ "expiryDate": null }))
        .await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["data"]["expiryDate"].is_null());

    let response = server
        .put(&format!("/api/coupons/{}", limited_id))
        .json(&json!({ "usageLimit": null }))
        .await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["data"]["usageLimit"].is_null());

    for id in [&expired_id, &limited_id] {
        let body: Value = server.get(&format!("/api/coupons/{}", id)).await.json();
        assert_eq!(body["data"]["status"], "active");
    }

    server
        .put(&format!("/api/coupons/{}", limited_id))
        .json(&json!({ "minOrder": -1.0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_quantity_limit_keeps_store_usable() {
    let server = test_server();
    let product = create_product(
        &server,
        json!({ "name": "Wool Socks", "category": "Accessories", "price": 99.0, "image": "/uploads/socks.jpg" }),
    )
    .await;
    let (name, value) = customer_header(Uuid::new_v4());
    let item = |quantity: u32| {
        json!({
            "productId": product["id"],
            "selectedSize": "Free",
            "selectedColor": "Grey",
            "quantity": quantity
        })
    };

    server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&item(1000))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&item(999))
        .await
        .json();
    assert_eq!(body["data"]["items"][0]["quantity"], 999);

    let response = server
        .post("/api/cart/items")
        .add_header(name.clone(), value.clone())
        .json(&item(1))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Quantity must not exceed 999 per item"
    );

    let body: Value = server
        .get("/api/cart")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(body["data"]["items"][0]["quantity"], 999);

    let (other_name, other_value) = customer_header(Uuid::new_v4());
    server
        .get("/api/cart")
        .add_header(other_name, other_value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_request_id_header_matches_body() {
    let server = test_server();
    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Silk Scarf", "category": "Accessories", "price": 799.0, "image": "/uploads/scarf.jpg" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(
        response.header(HeaderName::from_static("x-request-id")),
        body["requestId"].as_str().unwrap()
    );
}
