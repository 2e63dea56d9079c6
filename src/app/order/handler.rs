//! 订单处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use super::model::{
    CreateOrderRequest, CreateOrderResponse, Order, VerifyPaymentRequest, VerifyPaymentResponse,
};
use crate::app::AppState;
use crate::core::{error::CoreError, extractors::CustomerId, response::ApiResponse};

pub async fn create_order(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<ApiResponse<CreateOrderResponse>, CoreError> {
    let order = state.order_service.create_order(customer_id, payload)?;
    Ok(ApiResponse::success(order))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Json(payload): Json<VerifyPaymentRequest>,
) -> Result<ApiResponse<VerifyPaymentResponse>, CoreError> {
    let result = state.order_service.verify_payment(customer_id, payload)?;
    Ok(ApiResponse::success(result))
}

pub async fn list_orders(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<ApiResponse<Vec<Order>>, CoreError> {
    let orders = state.order_service.list_orders(customer_id)?;
    Ok(ApiResponse::success(orders))
}

pub async fn get_order(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Order>, CoreError> {
    let order = state.order_service.get_order(customer_id, id)?;
    Ok(ApiResponse::success(order))
}
