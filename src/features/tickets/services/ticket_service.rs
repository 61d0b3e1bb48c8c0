use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketIssuedDto, TicketStatusDto};
use crate::features::tickets::models::{Customer, NewTicket};
use crate::modules::queue_store::QueueStore;
use crate::shared::constants::DEFAULT_CUSTOMER_NAME;

/// Demo tickets issued when seeding is enabled: (user id, name, service, priority)
const DEMO_TICKETS: &[(&str, &str, &str, u32)] = &[
    ("u1", "Alice", "passport", 0),
    ("u2", "Bob", "passport", 0),
    ("u3", "Charlie", "passport", 5),
    ("u4", "Diana", "tax", 8),
    ("u5", "Eve", "tax", 0),
    ("u6", "Frank", "municipal", 0),
    ("u7", "Grace", "support", 0),
    ("u8", "Henry", "support", 0),
];

/// Service for issuing tickets and looking up their status
pub struct TicketService {
    store: Arc<QueueStore>,
    default_service: String,
}

impl TicketService {
    pub fn new(store: Arc<QueueStore>, default_service: String) -> Self {
        Self {
            store,
            default_service,
        }
    }

    /// Issue a ticket and report its position right after insertion
    pub async fn issue(&self, dto: CreateTicketDto) -> Result<TicketIssuedDto> {
        let name = dto
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_string();

        let service = dto
            .service
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_service.clone());

        let priority = match dto.priority {
            None => 0,
            Some(p) => u32::try_from(p).map_err(|_| {
                AppError::Validation("Priority must be a non-negative integer".to_string())
            })?,
        };

        let client_id = dto
            .user_id
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let (user_id, is_guest) = match client_id {
            Some(user_id) => (user_id, false),
            None => (self.store.next_guest_id(), true),
        };

        let issued = self
            .store
            .issue(
                NewTicket {
                    customer: Customer {
                        user_id,
                        name,
                        is_guest,
                    },
                    service,
                    priority,
                },
                Utc::now(),
            )
            .await?;

        tracing::info!(
            "Ticket issued: id={}, service={}, priority={}, position={}",
            issued.ticket.id,
            issued.ticket.service,
            issued.ticket.priority,
            issued.position.position
        );

        Ok(TicketIssuedDto::new(issued.ticket, issued.position))
    }

    /// Live position and wait of a pending ticket
    pub async fn status(&self, ticket_id: &str) -> Result<TicketStatusDto> {
        self.store
            .status(ticket_id.trim())
            .await
            .map(|(ticket, position)| TicketStatusDto::new(ticket, position))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Ticket '{}' not found or already served",
                    ticket_id
                ))
            })
    }

    /// Issue the demo ticket set, skipping services that are not configured
    pub async fn seed_demo(&self) -> Result<usize> {
        let mut issued = 0;

        for (user_id, name, service, priority) in DEMO_TICKETS {
            if !self.store.has_service(service) {
                continue;
            }
            self.issue(CreateTicketDto {
                name: Some(name.to_string()),
                service: Some(service.to_string()),
                priority: Some(i64::from(*priority)),
                user_id: Some(user_id.to_string()),
            })
            .await?;
            issued += 1;
        }

        Ok(issued)
    }
}
