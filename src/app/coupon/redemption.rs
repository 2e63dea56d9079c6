//! 优惠券核销规则

use chrono::{DateTime, Utc};

use super::model::{Coupon, CouponKind};
use super::status::CouponStatus;
use crate::core::error::CoreError;

/// 优惠券不能用于当前订单的原因
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RedemptionError {
    #[error("This coupon has expired")]
    Expired,
    #[error("This coupon has reached its usage limit")]
    LimitReached,
    #[error("Minimum order of ₹{0} required")]
    BelowMinimumOrder(f64),
}

impl From<RedemptionError> for CoreError {
    fn from(err: RedemptionError) -> Self {
        CoreError::BadRequest(err.to_string())
    }
}

impl Coupon {
    /// 检查优惠券能否用于给定小计
    pub fn check_redeemable(&self, subtotal: f64, now: DateTime<Utc>) -> Result<(), RedemptionError> {
        match self.status(now) {
            CouponStatus::Expired => return Err(RedemptionError::Expired),
            CouponStatus::LimitReached => return Err(RedemptionError::LimitReached),
            CouponStatus::Active => {}
        }

        if let Some(min_order) = self.min_order {
            if subtotal < min_order {
                return Err(RedemptionError::BelowMinimumOrder(min_order));
            }
        }

        Ok(())
    }

    /// 计算折扣金额，不超过小计
    pub fn discount_for(&self, subtotal: f64) -> f64 {
        let discount = match self.kind {
            CouponKind::Percentage => {
                let discount = subtotal * self.value / 100.0;
                match self.max_discount {
                    Some(cap) if discount > cap => cap,
                    _ => discount,
                }
            }
            CouponKind::Fixed => self.value,
        };
        discount.clamp(0.0, subtotal.max(0.0))
    }
}
