//! 支付网关

use tracing::warn;
use uuid::Uuid;

use super::model::{Order, VerifyPaymentRequest};

/// 支付网关接口
pub trait PaymentGateway: Send + Sync {
    /// 在网关侧创建订单，返回网关订单号
    fn create_order(&self, amount_minor_units: i64, currency: &str, receipt: &str) -> String;

    /// 校验前端回传的支付结果
    fn verify(&self, order: &Order, request: &VerifyPaymentRequest) -> bool;
}

/// 测试用网关，不对外发请求
///
/// 网关订单号形如 `mock_order_<uuid>`，只要回传的网关订单号与本地订单一致即视为支付成功。
#[derive(Debug, Default, Clone)]
pub struct MockGateway;

impl PaymentGateway for MockGateway {
    fn create_order(&self, amount_minor_units: i64, currency: &str, receipt: &str) -> String {
        warn!(
            "Mocking gateway order creation: {} {} for {}",
            amount_minor_units, currency, receipt
        );
        format!("mock_order_{}", Uuid::new_v4().simple())
    }

    fn verify(&self, order: &Order, request: &VerifyPaymentRequest) -> bool {
        warn!("Mocking payment verification for order {}. DO NOT use in production.", order.id);
        order.gateway_order_id == request.gateway_order_id
    }
}
