use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::tickets::dtos::{CreateTicketDto, TicketIssuedDto, TicketStatusDto};
use crate::features::tickets::services::TicketService;
use crate::shared::types::ApiResponse;

/// Take a ticket
///
/// Public kiosk endpoint. The response body carries `success: true` next to
/// the ticket fields.
#[utoipa::path(
    post,
    path = "/api/ticket",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket issued", body = TicketIssuedDto),
        (status = 400, description = "Invalid service, priority or body"),
        (status = 409, description = "User already holds a pending ticket for this service")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<Json<ApiResponse<TicketIssuedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.issue(dto).await?;
    Ok(Json(ApiResponse::success(ticket)))
}

/// Get a pending ticket's position and estimated wait
#[utoipa::path(
    get,
    path = "/api/status/{id}",
    params(
        ("id" = String, Path, description = "Ticket ID (e.g., TKT-000001)")
    ),
    responses(
        (status = 200, description = "Ticket is waiting", body = TicketStatusDto),
        (status = 404, description = "Ticket not found or already served")
    ),
    tag = "tickets"
)]
pub async fn get_status(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TicketStatusDto>>> {
    let status = service.status(&id).await?;
    Ok(Json(ApiResponse::success(status)))
}
