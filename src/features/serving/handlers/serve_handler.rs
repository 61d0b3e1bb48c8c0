use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::serving::dtos::{ServeNextDto, ServeResultDto};
use crate::features::serving::services::ServingService;
use crate::shared::constants::EMPTY_QUEUE_MESSAGE;
use crate::shared::types::ApiResponse;

/// Call the next customer
///
/// An empty queue answers `200` with `success: false` and a message.
#[utoipa::path(
    post,
    path = "/api/serve",
    request_body = ServeNextDto,
    responses(
        (status = 200, description = "Next ticket, or `success: false` with a message when nobody is waiting", body = ServeResultDto),
        (status = 400, description = "Unknown service or malformed body")
    ),
    tag = "serving"
)]
pub async fn serve_next(
    State(service): State<Arc<ServingService>>,
    AppJson(dto): AppJson<ServeNextDto>,
) -> Result<Json<ApiResponse<ServeResultDto>>> {
    let response = match service.serve_next(dto).await? {
        Some(ticket) => ApiResponse::success(ServeResultDto { ticket }),
        None => ApiResponse::unsuccessful(EMPTY_QUEUE_MESSAGE),
    };
    Ok(Json(response))
}
