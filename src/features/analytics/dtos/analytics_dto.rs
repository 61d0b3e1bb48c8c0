use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::analytics::models::{round_to_tenth, ServiceWaitStats};

/// Average wait of one service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceWaitDto {
    pub service: String,
    /// Average wait in minutes, rounded to one decimal
    pub avg_wait: f64,
    /// Number of served tickets the average covers
    pub served: usize,
}

impl From<ServiceWaitStats> for ServiceWaitDto {
    fn from(stats: ServiceWaitStats) -> Self {
        Self {
            service: stats.service,
            avg_wait: round_to_tenth(stats.average_wait_minutes),
            served: stats.served,
        }
    }
}

/// Response DTO for analytics, slowest service first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsDto {
    pub stats: Vec<ServiceWaitDto>,
}
