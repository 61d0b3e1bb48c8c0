mod served_record;

pub use served_record::{round_to_tenth, ServedHistory, ServedRecord, ServiceWaitStats};
