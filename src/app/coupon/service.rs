//! 优惠券业务服务

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::model::{
    normalize_code, Coupon, CouponView, CreateCouponRequest, UpdateCouponRequest,
};
use crate::core::error::CoreError;
use crate::infrastructure::store::Store;

#[derive(Clone)]
pub struct CouponService {
    store: Arc<Store>,
}

impl CouponService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list_coupons(&self) -> Result<Vec<CouponView>, CoreError> {
        let now = Utc::now();
        let coupons = self.store.coupons.list()?;
        Ok(coupons
            .into_iter()
            .map(|coupon| CouponView {
                status: coupon.status(now),
                coupon,
            })
            .collect())
    }

    pub fn get_coupon(&self, id: Uuid) -> Result<CouponView, CoreError> {
        let coupon = self.store.coupons.get(id)?.ok_or_else(|| not_found(id))?;
        Ok(CouponView {
            status: coupon.status(Utc::now()),
            coupon,
        })
    }

    pub fn create_coupon(&self, request: CreateCouponRequest) -> Result<Coupon, CoreError> {
        request.validate()?;
        request
            .kind
            .check_value(request.value)
            .map_err(CoreError::BadRequest)?;

        let coupon = request.into_coupon();
        let created = self.store.coupons.write(|coupons| {
            if coupons.iter().any(|c| c.code == coupon.code) {
                return Err(duplicate_code());
            }
            coupons.push(coupon.clone());
            Ok(coupon)
        })??;

        info!("Created coupon: {} ({})", created.code, created.id);
        Ok(created)
    }

    pub fn update_coupon(&self, id: Uuid, request: UpdateCouponRequest) -> Result<Coupon, CoreError> {
        request.validate()?;
        if request.is_empty() {
            return Err(CoreError::BadRequest("No update data provided".to_string()));
        }

        let updated = self.store.coupons.write(|coupons| {
            if let Some(code) = &request.code {
                let code = normalize_code(code);
                if coupons.iter().any(|c| c.code == code && c.id != id) {
                    return Err(duplicate_code());
                }
            }

            let coupon = coupons
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| not_found(id))?;
            let updated = request.apply(coupon);
            updated
                .kind
                .check_value(updated.value)
                .map_err(CoreError::BadRequest)?;

            *coupon = updated.clone();
            Ok(updated)
        })??;

        info!("Updated coupon: {} ({})", updated.code, updated.id);
        Ok(updated)
    }

    pub fn delete_coupon(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.store.coupons.remove(id)? {
            return Err(not_found(id));
        }
        info!("Deleted coupon: {}", id);
        Ok(())
    }

    /// 按券码查找并检查能否用于给定小计
    pub fn validate_code(&self, code: &str, subtotal: f64) -> Result<Coupon, CoreError> {
        let code = normalize_code(code);
        let coupon = self
            .store
            .coupons
            .find(|c| c.code == code)?
            .ok_or_else(|| CoreError::NotFound("Invalid coupon code".to_string()))?;

        coupon.check_redeemable(subtotal, Utc::now())?;
        Ok(coupon)
    }

    /// 支付成功后记一次使用
    pub fn record_usage(&self, code: &str) -> Result<(), CoreError> {
        let found = self.store.coupons.write(|coupons| {
            match coupons.iter_mut().find(|c| c.code == code) {
                Some(coupon) => {
                    coupon.used_count += 1;
                    true
                }
                None => false,
            }
        })?;

        if found {
            info!("Coupon {} used", code);
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> CoreError {
    CoreError::NotFound(format!("Coupon with id {} not found", id))
}

fn duplicate_code() -> CoreError {
    CoreError::Conflict("Coupon code already exists".to_string())
}
