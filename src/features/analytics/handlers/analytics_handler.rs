use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::analytics::dtos::AnalyticsDto;
use crate::features::analytics::services::AnalyticsService;
use crate::shared::types::ApiResponse;

/// Average wait time per service
#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Services with served tickets, slowest first", body = AnalyticsDto),
    ),
    tag = "analytics"
)]
pub async fn get_analytics(
    State(service): State<Arc<AnalyticsService>>,
) -> Result<Json<ApiResponse<AnalyticsDto>>> {
    let analytics = service.analytics().await?;
    Ok(Json(ApiResponse::success(analytics)))
}
