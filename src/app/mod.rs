//! 应用层：各业务模块和共享状态

pub mod cart;
pub mod content;
pub mod coupon;
pub mod order;
pub mod product;
pub mod routes;

use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::store::Store;
use cart::service::CartService;
use content::service::ContentService;
use coupon::service::CouponService;
use order::{payment::MockGateway, service::OrderService};
use product::service::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub product_service: ProductService,
    pub coupon_service: CouponService,
    pub cart_service: CartService,
    pub content_service: ContentService,
    pub order_service: OrderService,
}

impl AppState {
    pub fn new(store: Arc<Store>, config: &Config) -> Self {
        let product_service = ProductService::new(store.clone());
        let coupon_service = CouponService::new(store.clone());
        let cart_service = CartService::new(store.clone());
        let content_service = ContentService::new(store.clone());
        let order_service = OrderService::new(
            store.clone(),
            cart_service.clone(),
            coupon_service.clone(),
            Arc::new(MockGateway),
            config.shop.clone(),
            config.payment.clone(),
        );

        Self {
            store,
            product_service,
            coupon_service,
            cart_service,
            content_service,
            order_service,
        }
    }
}
