use std::sync::Arc;

use chrono::Utc;

use crate::core::error::Result;
use crate::features::serving::dtos::{ServeNextDto, ServedTicketDto};
use crate::modules::queue_store::QueueStore;

/// Service for calling customers to a counter
pub struct ServingService {
    store: Arc<QueueStore>,
    default_service: String,
}

impl ServingService {
    pub fn new(store: Arc<QueueStore>, default_service: String) -> Self {
        Self {
            store,
            default_service,
        }
    }

    /// Serve the highest-priority, earliest ticket of a service.
    ///
    /// `Ok(None)` means nobody is waiting; it is not an error.
    pub async fn serve_next(&self, dto: ServeNextDto) -> Result<Option<ServedTicketDto>> {
        let service = dto
            .service
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_service.clone());

        let Some(served) = self.store.serve_next(&service, Utc::now()).await? else {
            tracing::debug!("Serve requested for empty queue: service={}", service);
            return Ok(None);
        };

        tracing::info!(
            "Ticket served: id={}, service={}, priority={}, waited_minutes={:.1}",
            served.record.ticket_id,
            served.record.service,
            served.ticket.priority,
            served.record.wait_minutes()
        );

        Ok(Some(served.into()))
    }
}
