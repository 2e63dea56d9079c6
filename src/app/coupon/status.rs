//! 优惠券状态
//!
//! 状态不落库，每次根据当前时间派生：先判断过期，再判断次数用尽。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Coupon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CouponStatus {
    Active,
    Expired,
    LimitReached,
}

impl CouponStatus {
    pub fn is_active(self) -> bool {
        self == CouponStatus::Active
    }
}

impl std::fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CouponStatus::Active => "Active",
            CouponStatus::Expired => "Expired",
            CouponStatus::LimitReached => "Limit Reached",
        };
        f.write_str(label)
    }
}

pub fn coupon_status(coupon: &Coupon, now: DateTime<Utc>) -> CouponStatus {
    if coupon.expiry_date.is_some_and(|expiry| expiry < now) {
        return CouponStatus::Expired;
    }
    if coupon
        .usage_limit
        .is_some_and(|limit| coupon.used_count >= limit)
    {
        return CouponStatus::LimitReached;
    }
    CouponStatus::Active
}

impl Coupon {
    pub fn status(&self, now: DateTime<Utc>) -> CouponStatus {
        coupon_status(self, now)
    }
}
