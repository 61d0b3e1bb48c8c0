pub mod ticket_handler;

pub use ticket_handler::{__path_create_ticket, __path_get_status, create_ticket, get_status};
