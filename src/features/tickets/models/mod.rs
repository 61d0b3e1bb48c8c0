mod ticket;

pub use ticket::{Customer, NewTicket, QueuePosition, Ticket, TicketStatus};
