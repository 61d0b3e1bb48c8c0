pub mod analytics_handler;

pub use analytics_handler::{__path_get_analytics, get_analytics};
