//! 路由和中间件装配

use axum::{
    extract::State,
    http::HeaderValue,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::{cart, content, coupon, order, product, AppState};
use crate::config::HttpConfig;
use crate::core::{error::CoreError, middleware::request_logging_middleware};

/// 构建完整的应用路由
pub fn create_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        // 中间件按顺序应用，最后加的在最外层
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&http.cors_origins))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // 商品
        .route(
            "/products",
            get(product::handler::list_products).post(product::handler::create_product),
        )
        .route(
            "/products/:id",
            get(product::handler::get_product)
                .put(product::handler::update_product)
                .delete(product::handler::delete_product),
        )
        // 优惠券
        .route(
            "/coupons",
            get(coupon::handler::list_coupons).post(coupon::handler::create_coupon),
        )
        .route("/coupons/validate", post(coupon::handler::validate_coupon))
        .route(
            "/coupons/:id",
            get(coupon::handler::get_coupon)
                .put(coupon::handler::update_coupon)
                .delete(coupon::handler::delete_coupon),
        )
        // 购物车
        .route("/cart", get(cart::handler::get_cart))
        .route("/cart/items", post(cart::handler::add_item))
        .route(
            "/cart/items/:item_id",
            put(cart::handler::update_item).delete(cart::handler::remove_item),
        )
        // 站点内容
        .route(
            "/content/hero",
            get(content::handler::get_hero).post(content::handler::update_hero),
        )
        // 订单
        .route("/orders", get(order::handler::list_orders))
        .route("/orders/create", post(order::handler::create_order))
        .route("/orders/verify", post(order::handler::verify_payment))
        .route("/orders/:id", get(order::handler::get_order))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the shopfront API",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, CoreError> {
    let store = &state.store;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": {
            "type": "in-memory",
            "products": store.products.len()?,
            "coupons": store.coupons.len()?,
            "carts": store.carts.len()?,
            "orders": store.orders.len()?
        }
    })))
}
