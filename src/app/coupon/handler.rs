//! 优惠券处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;
use validator::Validate;

use super::model::{
    Coupon, CouponView, CreateCouponRequest, UpdateCouponRequest, ValidateCouponRequest,
};
use crate::app::AppState;
use crate::core::{error::CoreError, extractors::CustomerId, response::ApiResponse};

pub async fn list_coupons(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<CouponView>>, CoreError> {
    let coupons = state.coupon_service.list_coupons()?;
    Ok(ApiResponse::success(coupons))
}

pub async fn get_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<CouponView>, CoreError> {
    let coupon = state.coupon_service.get_coupon(id)?;
    Ok(ApiResponse::success(coupon))
}

pub async fn create_coupon(
    State(state): State<AppState>,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<ApiResponse<Coupon>, CoreError> {
    let coupon = state.coupon_service.create_coupon(payload)?;
    Ok(ApiResponse::created(coupon))
}

pub async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCouponRequest>,
) -> Result<ApiResponse<Coupon>, CoreError> {
    let coupon = state.coupon_service.update_coupon(id, payload)?;
    Ok(ApiResponse::success(coupon))
}

pub async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    state.coupon_service.delete_coupon(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// 结账前校验券码，需要顾客身份
pub async fn validate_coupon(
    State(state): State<AppState>,
    _customer: CustomerId,
    Json(payload): Json<ValidateCouponRequest>,
) -> Result<ApiResponse<Coupon>, CoreError> {
    payload.validate()?;

    let coupon = state
        .coupon_service
        .validate_code(&payload.code, payload.subtotal)?;
    Ok(ApiResponse::success(coupon))
}
