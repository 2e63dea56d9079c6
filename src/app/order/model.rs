//! 订单数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::app::cart::model::CartItem;
use crate::infrastructure::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderAddress {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<CartItem>,
    pub amount: f64,
    pub amount_subtotal: f64,
    pub amount_tax: f64,
    pub amount_shipping: f64,
    pub amount_discount: f64,
    pub status: OrderStatus,
    pub gateway_order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub address: OrderAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Order {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// 下单请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub coupon_code: Option<String>,
    #[validate(nested)]
    pub address: OrderAddress,
}

/// 下单结果，前端据此拉起支付
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub gateway_key_id: String,
    pub gateway_order_id: String,
    pub order_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub customer_name: String,
    pub customer_email: String,
}

/// 支付确认请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    #[validate(length(min = 1, message = "Gateway order id must not be empty"))]
    pub gateway_order_id: String,
    #[validate(length(min = 1, message = "Payment id must not be empty"))]
    pub payment_id: String,
    #[validate(length(min = 1, message = "Signature must not be empty"))]
    pub signature: String,
    pub order_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub status: OrderStatus,
    pub order_id: Uuid,
}
