//! Process-wide queue store
//!
//! Owns one [`ServiceQueue`] per configured service category, each behind its
//! own lock. Issuing, position reads and serve-next for a service run under
//! that service's lock; operations on different services never contend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::config::QueueConfig;
use crate::core::error::{AppError, Result};
use crate::features::analytics::models::ServiceWaitStats;
use crate::features::tickets::models::{NewTicket, QueuePosition, Ticket, TicketStatus};
use crate::modules::queue_store::service_queue::{ServedTicket, ServiceQueue};
use crate::shared::constants::{GUEST_USER_PREFIX, TICKET_ID_PREFIX};

/// Freshly issued ticket and its rank at insertion time
#[derive(Debug, Clone)]
pub struct IssuedTicket {
    pub ticket: Ticket,
    pub position: QueuePosition,
}

pub struct QueueStore {
    services: Vec<String>,
    queues: HashMap<String, Mutex<ServiceQueue>>,
    service_minutes: u32,
    ticket_sequence: AtomicU64,
    guest_sequence: AtomicU64,
}

impl QueueStore {
    pub fn new(config: &QueueConfig) -> Self {
        let queues = config
            .services
            .iter()
            .map(|service| (service.clone(), Mutex::new(ServiceQueue::new())))
            .collect();

        Self {
            services: config.services.clone(),
            queues,
            service_minutes: config.service_minutes,
            ticket_sequence: AtomicU64::new(0),
            guest_sequence: AtomicU64::new(0),
        }
    }

    /// Configured service categories, in configuration order
    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.queues.contains_key(service)
    }

    fn queue(&self, service: &str) -> Result<&Mutex<ServiceQueue>> {
        self.queues
            .get(service)
            .ok_or_else(|| AppError::Validation(format!("Invalid service type: {}", service)))
    }

    fn next_ticket_id(&self) -> String {
        let seq = self.ticket_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:06}", TICKET_ID_PREFIX, seq)
    }

    /// Unique user id for a customer who did not identify themselves
    pub fn next_guest_id(&self) -> String {
        let seq = self.guest_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", GUEST_USER_PREFIX, seq)
    }

    /// Create a pending ticket and insert it into its service queue
    pub async fn issue(&self, new_ticket: NewTicket, now: DateTime<Utc>) -> Result<IssuedTicket> {
        let mut queue = self.queue(&new_ticket.service)?.lock().await;

        let ticket = Ticket {
            id: self.next_ticket_id(),
            customer: new_ticket.customer,
            service: new_ticket.service,
            priority: new_ticket.priority,
            expected_minutes: self.service_minutes,
            issued_at: now,
            status: TicketStatus::Pending,
        };

        let position = queue.enqueue(ticket.clone())?;

        Ok(IssuedTicket { ticket, position })
    }

    /// Look up a pending ticket and its live position across all queues
    pub async fn status(&self, ticket_id: &str) -> Option<(Ticket, QueuePosition)> {
        for service in &self.services {
            let Some(lock) = self.queues.get(service) else {
                continue;
            };
            let queue = lock.lock().await;
            if queue.is_empty() {
                continue;
            }
            if let (Some(ticket), Some(position)) =
                (queue.get(ticket_id), queue.position_of(ticket_id))
            {
                return Some((ticket.clone(), position));
            }
        }

        debug!("Ticket {} is not pending in any queue", ticket_id);
        None
    }

    /// Serve the head of a service queue, `None` when nobody is waiting
    pub async fn serve_next(
        &self,
        service: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ServedTicket>> {
        let mut queue = self.queue(service)?.lock().await;
        Ok(queue.serve_next(now))
    }

    /// Number of pending tickets in a service queue
    pub async fn waiting(&self, service: &str) -> Result<usize> {
        Ok(self.queue(service)?.lock().await.len())
    }

    /// Wait statistics of a service's served-history log
    pub async fn wait_stats(&self, service: &str) -> Result<Option<ServiceWaitStats>> {
        Ok(self.queue(service)?.lock().await.history().stats(service))
    }
}
