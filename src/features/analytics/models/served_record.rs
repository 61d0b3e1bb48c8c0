use chrono::{DateTime, TimeDelta, Utc};

/// Immutable entry in a service's served-history log
#[derive(Debug, Clone, PartialEq)]
pub struct ServedRecord {
    pub ticket_id: String,
    pub service: String,
    /// Time between issue and serve, never negative
    pub wait: TimeDelta,
    pub served_at: DateTime<Utc>,
}

impl ServedRecord {
    pub fn new(
        ticket_id: String,
        service: String,
        issued_at: DateTime<Utc>,
        served_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ticket_id,
            service,
            wait: (served_at - issued_at).max(TimeDelta::zero()),
            served_at,
        }
    }

    /// Wait duration in fractional minutes
    pub fn wait_minutes(&self) -> f64 {
        self.wait.num_milliseconds() as f64 / 60_000.0
    }
}

/// Round minutes to one decimal place for display
pub fn round_to_tenth(minutes: f64) -> f64 {
    (minutes * 10.0).round() / 10.0
}

/// Aggregated wait statistics for one service, at full precision
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceWaitStats {
    pub service: String,
    pub average_wait_minutes: f64,
    pub served: usize,
}

/// Append-only served-history log of one service.
///
/// Keeps the summed wait next to the records so statistics are read in
/// constant time.
#[derive(Debug, Default)]
pub struct ServedHistory {
    records: Vec<ServedRecord>,
    total_wait: TimeDelta,
}

impl ServedHistory {
    pub fn push(&mut self, record: ServedRecord) {
        self.total_wait = self.total_wait + record.wait;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn records(&self) -> &[ServedRecord] {
        &self.records
    }

    /// Mean wait over the log, `None` when nothing has been served
    pub fn stats(&self, service: &str) -> Option<ServiceWaitStats> {
        if self.is_empty() {
            return None;
        }

        let total_minutes = self.total_wait.num_milliseconds() as f64 / 60_000.0;

        Some(ServiceWaitStats {
            service: service.to_string(),
            average_wait_minutes: total_minutes / self.len() as f64,
            served: self.len(),
        })
    }
}
