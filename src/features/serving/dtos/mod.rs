mod serve_dto;

pub use serve_dto::{ServeNextDto, ServeResultDto, ServedTicketDto};
