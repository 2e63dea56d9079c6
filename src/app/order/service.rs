//! 订单业务服务

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::model::{
    CreateOrderRequest, CreateOrderResponse, Order, OrderStatus, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
use super::payment::PaymentGateway;
use super::pricing::OrderPricing;
use crate::app::cart::service::CartService;
use crate::app::coupon::{model::Coupon, service::CouponService};
use crate::config::{PaymentConfig, ShopConfig};
use crate::core::error::CoreError;
use crate::infrastructure::store::Store;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<Store>,
    cart_service: CartService,
    coupon_service: CouponService,
    gateway: Arc<dyn PaymentGateway>,
    shop: ShopConfig,
    payment: PaymentConfig,
}

impl OrderService {
    pub fn new(
        store: Arc<Store>,
        cart_service: CartService,
        coupon_service: CouponService,
        gateway: Arc<dyn PaymentGateway>,
        shop: ShopConfig,
        payment: PaymentConfig,
    ) -> Self {
        Self {
            store,
            cart_service,
            coupon_service,
            gateway,
            shop,
            payment,
        }
    }

    /// 按购物车生成待支付订单
    ///
    /// 优惠券不可用时只记录警告，按无优惠计算。
    pub fn create_order(
        &self,
        customer_id: Uuid,
        request: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, CoreError> {
        request.validate()?;

        let cart = self.cart_service.get_cart(customer_id)?;
        if cart.items.is_empty() {
            return Err(CoreError::BadRequest("Your cart is empty".to_string()));
        }

        let subtotal = cart.subtotal();
        let coupon = self.applicable_coupon(request.coupon_code.as_deref(), subtotal);
        let discount = coupon.as_ref().map_or(0.0, |c| c.discount_for(subtotal));
        let pricing = OrderPricing::compute(subtotal, discount, &self.shop);

        let order_id = Uuid::new_v4();
        let receipt = format!("order_rcpt_{}", order_id.simple());
        let gateway_order_id =
            self.gateway
                .create_order(pricing.total_minor_units(), &self.shop.currency, &receipt);

        let order = Order {
            id: order_id,
            customer_id,
            items: cart.items,
            amount: pricing.total,
            amount_subtotal: pricing.subtotal,
            amount_tax: pricing.tax,
            amount_shipping: pricing.shipping,
            amount_discount: pricing.discount,
            status: OrderStatus::Pending,
            gateway_order_id,
            payment_id: None,
            signature: None,
            address: request.address,
            coupon_code: coupon.map(|c| c.code),
            created_at: Utc::now(),
        };
        let order = self.store.orders.insert(order)?;
        info!(
            "Created order {} for customer {}: {:.2} {}",
            order.id, customer_id, order.amount, self.shop.currency
        );

        Ok(CreateOrderResponse {
            gateway_key_id: self.payment.key_id.clone(),
            gateway_order_id: order.gateway_order_id,
            order_id: order.id,
            amount: order.amount,
            currency: self.shop.currency.clone(),
            customer_name: order.address.name,
            customer_email: order.address.email,
        })
    }

    /// 确认支付：订单置为已支付、清空购物车、记一次优惠券使用
    pub fn verify_payment(
        &self,
        customer_id: Uuid,
        request: VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, CoreError> {
        request.validate()?;

        let order = self.get_order(customer_id, request.order_id)?;
        if order.status == OrderStatus::Paid {
            return Ok(VerifyPaymentResponse {
                status: OrderStatus::Paid,
                order_id: order.id,
            });
        }

        if !self.gateway.verify(&order, &request) {
            warn!("Payment verification failed for order {}", order.id);
            return Err(CoreError::BadRequest("Payment verification failed".to_string()));
        }

        // 并发确认时只有一次请求能把订单从待支付改为已支付
        let newly_paid = self.store.orders.write(|orders| {
            match orders.iter_mut().find(|o| o.id == order.id) {
                Some(stored) if stored.status == OrderStatus::Pending => {
                    stored.status = OrderStatus::Paid;
                    stored.payment_id = Some(request.payment_id.clone());
                    stored.signature = Some(request.signature.clone());
                    true
                }
                _ => false,
            }
        })?;

        if newly_paid {
            self.cart_service.clear(customer_id)?;
            if let Some(code) = &order.coupon_code {
                self.coupon_service.record_usage(code)?;
            }
            info!("Order {} paid", order.id);
        }
        Ok(VerifyPaymentResponse {
            status: OrderStatus::Paid,
            order_id: order.id,
        })
    }

    pub fn list_orders(&self, customer_id: Uuid) -> Result<Vec<Order>, CoreError> {
        Ok(self.store.orders.read(|orders| {
            orders
                .iter()
                .filter(|o| o.customer_id == customer_id)
                .cloned()
                .collect()
        })?)
    }

    /// 只能查看自己的订单
    pub fn get_order(&self, customer_id: Uuid, order_id: Uuid) -> Result<Order, CoreError> {
        self.store
            .orders
            .get(order_id)?
            .filter(|o| o.customer_id == customer_id)
            .ok_or_else(|| CoreError::NotFound("Order not found".to_string()))
    }

    fn applicable_coupon(&self, code: Option<&str>, subtotal: f64) -> Option<Coupon> {
        let code = code.map(str::trim).filter(|c| !c.is_empty())?;
        match self.coupon_service.validate_code(code, subtotal) {
            Ok(coupon) => Some(coupon),
            Err(err) => {
                warn!("Invalid coupon at order creation: {}", err.message());
                None
            }
        }
    }
}
