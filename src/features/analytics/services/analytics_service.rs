use std::sync::Arc;

use crate::core::error::Result;
use crate::features::analytics::dtos::AnalyticsDto;
use crate::features::analytics::models::ServiceWaitStats;
use crate::modules::queue_store::QueueStore;

/// Service for wait-time analytics over the served-history log
pub struct AnalyticsService {
    store: Arc<QueueStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<QueueStore>) -> Self {
        Self { store }
    }

    /// Average wait per service at full precision, highest first.
    ///
    /// Services that have not served anyone are left out.
    pub async fn wait_stats(&self) -> Result<Vec<ServiceWaitStats>> {
        let mut stats = Vec::new();
        for service in self.store.services() {
            if let Some(entry) = self.store.wait_stats(service).await? {
                stats.push(entry);
            }
        }

        stats.sort_by(|a, b| {
            b.average_wait_minutes
                .total_cmp(&a.average_wait_minutes)
                .then_with(|| a.service.cmp(&b.service))
        });

        Ok(stats)
    }

    pub async fn analytics(&self) -> Result<AnalyticsDto> {
        let stats = self.wait_stats().await?;
        Ok(AnalyticsDto {
            stats: stats.into_iter().map(Into::into).collect(),
        })
    }
}
