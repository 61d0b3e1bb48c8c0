use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tickets::models::{QueuePosition, Ticket, TicketStatus};
use crate::shared::constants::{MAX_CUSTOMER_NAME_LENGTH, MAX_PRIORITY};

/// Request DTO for taking a ticket at the kiosk
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    /// Customer name; blank names are recorded as "Guest"
    #[validate(length(
        max = MAX_CUSTOMER_NAME_LENGTH,
        message = "Name must not exceed 100 characters"
    ))]
    pub name: Option<String>,

    /// Service category; defaults to the configured default service
    pub service: Option<String>,

    /// Priority level (0 = normal, higher is served first)
    #[validate(range(
        min = 0,
        max = MAX_PRIORITY,
        message = "Priority must be a non-negative integer"
    ))]
    pub priority: Option<i64>,

    /// Optional customer identifier; a user holds one pending ticket per service
    pub user_id: Option<String>,
}

/// Response DTO for a newly issued ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketIssuedDto {
    pub ticket_id: String,
    pub service: String,
    pub priority: u32,
    pub customer: String,
    /// 1-based rank within the service queue
    pub position: u32,
    /// Estimated wait in minutes
    pub wait_time: u32,
}

impl TicketIssuedDto {
    pub fn new(ticket: Ticket, position: QueuePosition) -> Self {
        Self {
            ticket_id: ticket.id,
            service: ticket.service,
            priority: ticket.priority,
            customer: ticket.customer.name,
            position: position.position,
            wait_time: position.estimated_wait_minutes,
        }
    }
}

/// Response DTO for a pending ticket's live status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketStatusDto {
    pub ticket_id: String,
    pub position: u32,
    pub wait_time: u32,
    pub customer: String,
    pub service: String,
    pub priority: u32,
    pub status: TicketStatus,
}

impl TicketStatusDto {
    pub fn new(ticket: Ticket, position: QueuePosition) -> Self {
        Self {
            ticket_id: ticket.id,
            position: position.position,
            wait_time: position.estimated_wait_minutes,
            customer: ticket.customer.name,
            service: ticket.service,
            priority: ticket.priority,
            status: ticket.status,
        }
    }
}
