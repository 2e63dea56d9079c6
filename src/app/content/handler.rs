//! 站点内容处理器

use axum::{extract::State, response::Json};

use super::model::{HeroContent, UpdateHeroRequest};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn get_hero(
    State(state): State<AppState>,
) -> Result<ApiResponse<HeroContent>, CoreError> {
    let hero = state.content_service.get_hero()?;
    Ok(ApiResponse::success(hero))
}

pub async fn update_hero(
    State(state): State<AppState>,
    Json(payload): Json<UpdateHeroRequest>,
) -> Result<ApiResponse<HeroContent>, CoreError> {
    let hero = state.content_service.update_hero(payload)?;
    Ok(ApiResponse::success(hero))
}
