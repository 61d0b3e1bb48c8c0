mod ticket_service;

pub use ticket_service::TicketService;
