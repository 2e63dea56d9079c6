//! 购物车处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use super::model::{AddCartItemRequest, Cart, UpdateCartItemRequest};
use crate::app::AppState;
use crate::core::{error::CoreError, extractors::CustomerId, response::ApiResponse};

pub async fn get_cart(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<ApiResponse<Cart>, CoreError> {
    let cart = state.cart_service.get_cart(customer_id)?;
    Ok(ApiResponse::success(cart))
}

pub async fn add_item(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Json(payload): Json<AddCartItemRequest>,
) -> Result<ApiResponse<Cart>, CoreError> {
    let cart = state.cart_service.add_item(customer_id, payload)?;
    Ok(ApiResponse::success(cart))
}

pub async fn update_item(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Path(item_id): Path<Uuid>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> Result<ApiResponse<Cart>, CoreError> {
    let cart = state.cart_service.update_item(customer_id, item_id, payload)?;
    Ok(ApiResponse::success(cart))
}

pub async fn remove_item(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Path(item_id): Path<Uuid>,
) -> Result<ApiResponse<Cart>, CoreError> {
    let cart = state.cart_service.remove_item(customer_id, item_id)?;
    Ok(ApiResponse::success(cart))
}
