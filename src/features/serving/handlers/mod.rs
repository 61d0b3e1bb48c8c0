pub mod serve_handler;

pub use serve_handler::{__path_serve_next, serve_next};
