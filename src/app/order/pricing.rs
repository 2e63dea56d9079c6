//! 订单金额计算

use serde::Serialize;

use crate::config::ShopConfig;

/// 订单金额明细，均保留两位小数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPricing {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderPricing {
    /// 折后金额超过免运费门槛时不收运费，税按折后金额计算
    pub fn compute(subtotal: f64, discount: f64, shop: &ShopConfig) -> Self {
        let discount = discount.clamp(0.0, subtotal.max(0.0));
        let discounted = subtotal - discount;
        let shipping = if discounted > shop.free_shipping_threshold {
            0.0
        } else {
            shop.shipping_fee
        };
        let tax = discounted * shop.tax_rate;
        let total = discounted + shipping + tax;

        Self {
            subtotal: round2(subtotal),
            discount: round2(discount),
            shipping: round2(shipping),
            tax: round2(tax),
            total: round2(total),
        }
    }

    /// 以最小货币单位表示的应付金额
    pub fn total_minor_units(&self) -> i64 {
        (self.total * 100.0).round() as i64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
