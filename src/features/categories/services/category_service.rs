use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryListDto, CategoryResponseDto};
use crate::modules::queue_store::QueueStore;

/// Service for the configured service categories
pub struct CategoryService {
    store: Arc<QueueStore>,
    default_service: String,
}

impl CategoryService {
    pub fn new(store: Arc<QueueStore>, default_service: String) -> Self {
        Self {
            store,
            default_service,
        }
    }

    /// List all service categories in configuration order
    pub async fn list(&self) -> Result<CategoryListDto> {
        let mut services = Vec::with_capacity(self.store.services().len());
        for service in self.store.services() {
            services.push(self.describe(service).await?);
        }
        Ok(CategoryListDto { services })
    }

    /// Get a single service category by code
    pub async fn get(&self, service: &str) -> Result<CategoryResponseDto> {
        if !self.store.has_service(service) {
            return Err(AppError::NotFound(format!(
                "Service '{}' not found",
                service
            )));
        }
        self.describe(service).await
    }

    async fn describe(&self, service: &str) -> Result<CategoryResponseDto> {
        Ok(CategoryResponseDto {
            service: service.to_string(),
            waiting: self.store.waiting(service).await?,
            is_default: service == self.default_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::dtos::CreateTicketDto;
    use crate::features::tickets::TicketService;
    use crate::shared::test_helpers::test_queue_config;

    #[tokio::test]
    async fn test_list_counts_waiting_tickets() {
        let config = test_queue_config();
        let store = Arc::new(QueueStore::new(&config));
        let tickets = TicketService::new(Arc::clone(&store), config.default_service.clone());
        let categories = CategoryService::new(store, config.default_service);

        tickets.issue(CreateTicketDto::default()).await.unwrap();

        let list = categories.list().await.unwrap();
        let summary: Vec<_> = list
            .services
            .iter()
            .map(|c| (c.service.as_str(), c.waiting, c.is_default))
            .collect();
        assert_eq!(summary, vec![("billing", 1, true), ("support", 0, false)]);
    }

    #[tokio::test]
    async fn test_get_unknown_service() {
        let config = test_queue_config();
        let categories =
            CategoryService::new(Arc::new(QueueStore::new(&config)), config.default_service);

        let err = categories.get("bakery").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(categories.get("support").await.unwrap().waiting, 0);
    }
}
