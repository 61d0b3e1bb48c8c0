use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ticket lifecycle. A ticket moves from `Pending` to `Served` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Served,
}

/// Person holding a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub user_id: String,
    pub name: String,
    /// Generated identity; guests are never limited to one active ticket
    pub is_guest: bool,
}

/// A customer's place in a service queue
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: String,
    pub customer: Customer,
    pub service: String,
    /// Higher values are served first; 0 is a normal ticket
    pub priority: u32,
    /// Expected handling time at the counter, used for wait estimates
    pub expected_minutes: u32,
    pub issued_at: DateTime<Utc>,
    pub status: TicketStatus,
}

/// Input for issuing a ticket, already normalized by the caller
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub customer: Customer,
    pub service: String,
    pub priority: u32,
}

/// Live rank of a pending ticket within its service queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePosition {
    /// 1-based rank
    pub position: u32,
    /// Sum of expected minutes of every ticket ahead
    pub estimated_wait_minutes: u32,
}
