use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryListDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all service categories with their waiting counts
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Configured service categories", body = CategoryListDto),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Get a service category by code
#[utoipa::path(
    get,
    path = "/api/services/{service}",
    params(
        ("service" = String, Path, description = "Service category code")
    ),
    responses(
        (status = 200, description = "Service category found", body = CategoryResponseDto),
        (status = 404, description = "Service category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(&code).await?;
    Ok(Json(ApiResponse::success(category)))
}
