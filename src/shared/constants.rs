/// Name recorded for customers who leave the name field blank
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Maximum customer name length accepted by the kiosk endpoint
pub const MAX_CUSTOMER_NAME_LENGTH: u64 = 100;

/// Highest priority level a ticket may carry
pub const MAX_PRIORITY: i64 = u32::MAX as i64;

/// Prefix of every issued ticket identifier (e.g. TKT-000042)
pub const TICKET_ID_PREFIX: &str = "TKT";

/// Prefix of generated user ids for customers who did not identify themselves
pub const GUEST_USER_PREFIX: &str = "guest";

/// Message returned when a counter asks for the next ticket of an empty queue
pub const EMPTY_QUEUE_MESSAGE: &str = "No customers waiting";
