pub mod analytics;
pub mod categories;
pub mod serving;
pub mod tickets;
