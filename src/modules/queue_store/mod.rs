//! In-memory queue store
//!
//! Holds every pending ticket and the served-history log for the lifetime of
//! the process. Created once at startup and shared with handlers by `Arc`.

mod service_queue;
mod store;

pub use service_queue::ServedTicket;
pub use store::QueueStore;
