//! 商品处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use super::model::{CreateProductRequest, Product, ProductQuery, UpdateProductRequest};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<ApiResponse<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products(&query)?;
    Ok(ApiResponse::success(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Product>, CoreError> {
    let product = state.product_service.get_product(id)?;
    Ok(ApiResponse::success(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<ApiResponse<Product>, CoreError> {
    let product = state.product_service.create_product(payload)?;
    Ok(ApiResponse::created(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<ApiResponse<Product>, CoreError> {
    let product = state.product_service.update_product(id, payload)?;
    Ok(ApiResponse::success(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete_product(id)?;
    Ok(StatusCode::NO_CONTENT)
}
