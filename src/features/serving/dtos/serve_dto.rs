use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::analytics::models::round_to_tenth;
use crate::features::tickets::models::TicketStatus;
use crate::modules::queue_store::ServedTicket;

/// Request DTO for calling the next customer to a counter
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ServeNextDto {
    /// Service category; defaults to the configured default service
    pub service: Option<String>,
}

/// Ticket handed to the counter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServedTicketDto {
    pub id: String,
    pub customer: String,
    pub priority: u32,
    pub service: String,
    pub status: TicketStatus,
    /// Time the customer waited, in minutes (one decimal)
    pub waited_minutes: f64,
    pub served_at: DateTime<Utc>,
}

impl From<ServedTicket> for ServedTicketDto {
    fn from(served: ServedTicket) -> Self {
        let waited = round_to_tenth(served.record.wait_minutes());
        Self {
            id: served.ticket.id,
            customer: served.ticket.customer.name,
            priority: served.ticket.priority,
            service: served.ticket.service,
            status: served.ticket.status,
            waited_minutes: waited,
            served_at: served.record.served_at,
        }
    }
}

/// Response DTO for serve-next
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServeResultDto {
    pub ticket: ServedTicketDto,
}
