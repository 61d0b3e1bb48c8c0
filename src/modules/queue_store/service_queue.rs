//! Pending tickets and served history of a single service counter

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};
use crate::features::analytics::models::{ServedHistory, ServedRecord};
use crate::features::tickets::models::{QueuePosition, Ticket, TicketStatus};

/// Ordering key: higher priority first, then earlier arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueKey {
    priority: Reverse<u32>,
    arrival: u64,
}

/// Ticket removed from the head of a queue together with its history entry
#[derive(Debug, Clone)]
pub struct ServedTicket {
    pub ticket: Ticket,
    pub record: ServedRecord,
}

#[derive(Debug, Default)]
pub struct ServiceQueue {
    pending: BTreeMap<QueueKey, Ticket>,
    keys: HashMap<String, QueueKey>,
    /// Identified users holding a pending ticket
    active_users: HashSet<String>,
    history: ServedHistory,
    next_arrival: u64,
}

impl ServiceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Insert a pending ticket at its ordered place and return its rank.
    ///
    /// A user may hold a single pending ticket per service.
    pub fn enqueue(&mut self, ticket: Ticket) -> Result<QueuePosition> {
        let limited = !ticket.customer.is_guest;
        if limited && self.active_users.contains(&ticket.customer.user_id) {
            return Err(AppError::Conflict(format!(
                "User {} already has an active ticket in this service",
                ticket.customer.user_id
            )));
        }
        debug_assert!(!self.keys.contains_key(&ticket.id));

        let key = QueueKey {
            priority: Reverse(ticket.priority),
            arrival: self.next_arrival,
        };
        self.next_arrival += 1;

        let ticket_id = ticket.id.clone();
        if limited {
            self.active_users.insert(ticket.customer.user_id.clone());
        }
        self.keys.insert(ticket_id.clone(), key);
        self.pending.insert(key, ticket);

        self.position_of(&ticket_id).ok_or_else(|| {
            AppError::Internal(format!("Ticket '{}' vanished after insert", ticket_id))
        })
    }

    /// Current rank of a pending ticket, `None` if it is not waiting here
    pub fn position_of(&self, ticket_id: &str) -> Option<QueuePosition> {
        let key = self.keys.get(ticket_id)?;

        let (ahead, minutes) = self
            .pending
            .range(..*key)
            .fold((0u32, 0u32), |(count, minutes), (_, t)| {
                (count + 1, minutes.saturating_add(t.expected_minutes))
            });

        Some(QueuePosition {
            position: ahead + 1,
            estimated_wait_minutes: minutes,
        })
    }

    pub fn get(&self, ticket_id: &str) -> Option<&Ticket> {
        self.keys
            .get(ticket_id)
            .and_then(|key| self.pending.get(key))
    }

    /// Remove the head ticket, mark it served and append its wait to the history
    pub fn serve_next(&mut self, now: DateTime<Utc>) -> Option<ServedTicket> {
        let (_, mut ticket) = self.pending.pop_first()?;

        self.keys.remove(&ticket.id);
        if !ticket.customer.is_guest {
            self.active_users.remove(&ticket.customer.user_id);
        }
        ticket.status = TicketStatus::Served;

        let record = ServedRecord::new(
            ticket.id.clone(),
            ticket.service.clone(),
            ticket.issued_at,
            now,
        );
        self.history.push(record.clone());

        Some(ServedTicket { ticket, record })
    }

    pub fn history(&self) -> &ServedHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::models::Customer;
    use chrono::TimeDelta;

    fn ticket(id: &str, priority: u32, issued_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id: id.to_string(),
            customer: Customer {
                user_id: format!("user-{}", id),
                name: id.to_string(),
                is_guest: false,
            },
            service: "billing".to_string(),
            priority,
            expected_minutes: 10,
            issued_at,
            status: TicketStatus::Pending,
        }
    }

    fn serve_order(queue: &mut ServiceQueue) -> Vec<String> {
        let now = Utc::now();
        std::iter::from_fn(|| queue.serve_next(now))
            .map(|served| served.ticket.id)
            .collect()
    }

    #[test]
    fn test_priority_jumps_ahead_of_normal_tickets() {
        let now = Utc::now();
        let mut queue = ServiceQueue::new();

        let a = queue.enqueue(ticket("A", 0, now)).unwrap();
        assert_eq!(a.position, 1);

        let b = queue.enqueue(ticket("B", 5, now)).unwrap();
        assert_eq!(b.position, 1);
        assert_eq!(queue.position_of("A").unwrap().position, 2);
    }

    #[test]
    fn test_serve_order_is_priority_then_arrival() {
        let now = Utc::now();
        let mut queue = ServiceQueue::new();
        queue.enqueue(ticket("normal-1", 0, now)).unwrap();
        queue.enqueue(ticket("vip", 10, now)).unwrap();
        queue.enqueue(ticket("urgent-1", 5, now)).unwrap();
        queue.enqueue(ticket("normal-2", 0, now)).unwrap();
        queue.enqueue(ticket("urgent-2", 5, now)).unwrap();

        assert_eq!(
            serve_order(&mut queue),
            vec!["vip", "urgent-1", "urgent-2", "normal-1", "normal-2"]
        );
    }

    #[test]
    fn test_estimated_wait_sums_tickets_ahead() {
        let now = Utc::now();
        let mut queue = ServiceQueue::new();
        let mut p1 = ticket("P1", 0, now);
        p1.expected_minutes = 10;
        let mut p2 = ticket("P2", 5, now);
        p2.expected_minutes = 15;
        let p3 = ticket("P3", 0, now);

        queue.enqueue(p1).unwrap();
        queue.enqueue(p2).unwrap();
        queue.enqueue(p3).unwrap();

        let expect = |position, estimated_wait_minutes| QueuePosition {
            position,
            estimated_wait_minutes,
        };
        assert_eq!(queue.position_of("P2"), Some(expect(1, 0)));
        assert_eq!(queue.position_of("P1"), Some(expect(2, 15)));
        assert_eq!(queue.position_of("P3"), Some(expect(3, 25)));
    }

    #[test]
    fn test_one_active_ticket_per_user() {
        let now = Utc::now();
        let mut queue = ServiceQueue::new();
        queue.enqueue(ticket("A", 0, now)).unwrap();

        let mut again = ticket("A2", 0, now);
        again.customer.user_id = "user-A".to_string();
        let err = queue.enqueue(again.clone()).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Served tickets release the user
        queue.serve_next(now).unwrap();
        assert!(queue.enqueue(again).is_ok());
    }

    #[test]
    fn test_guests_are_not_limited_by_client_ids() {
        let now = Utc::now();
        let mut queue = ServiceQueue::new();

        let mut client = ticket("A", 0, now);
        client.customer.user_id = "guest-1".to_string();
        queue.enqueue(client.clone()).unwrap();

        let mut guest = ticket("B", 5, now);
        guest.customer.user_id = "guest-1".to_string();
        guest.customer.is_guest = true;
        assert_eq!(queue.enqueue(guest).unwrap().position, 1);

        // Serving the guest keeps the identified user's slot taken
        assert_eq!(queue.serve_next(now).unwrap().ticket.id, "B");
        client.id = "C".to_string();
        let err = queue.enqueue(client).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_serve_next_records_wait_and_forgets_ticket() {
        let issued = Utc::now();
        let mut queue = ServiceQueue::new();
        queue.enqueue(ticket("A", 0, issued)).unwrap();

        let served = queue.serve_next(issued + TimeDelta::minutes(4)).unwrap();
        assert_eq!(served.ticket.status, TicketStatus::Served);
        assert_eq!(served.record.wait_minutes(), 4.0);
        assert_eq!(queue.history().records(), &[served.record]);

        assert!(queue.position_of("A").is_none());
        assert!(queue.get("A").is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_serve_next_on_empty_queue() {
        let mut queue = ServiceQueue::new();
        assert!(queue.serve_next(Utc::now()).is_none());
        assert!(queue.history().is_empty());
    }
}
