use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::config::QueueConfig;
use crate::features::analytics::{routes as analytics_routes, AnalyticsService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::serving::{routes as serving_routes, ServingService};
use crate::features::tickets::{routes as tickets_routes, TicketService};
use crate::modules::queue_store::QueueStore;

/// Feature services sharing one queue store
pub struct AppServices {
    pub tickets: Arc<TicketService>,
    pub serving: Arc<ServingService>,
    pub analytics: Arc<AnalyticsService>,
    pub categories: Arc<CategoryService>,
}

impl AppServices {
    pub fn new(store: Arc<QueueStore>, queue: &QueueConfig) -> Self {
        Self {
            tickets: Arc::new(TicketService::new(
                Arc::clone(&store),
                queue.default_service.clone(),
            )),
            serving: Arc::new(ServingService::new(
                Arc::clone(&store),
                queue.default_service.clone(),
            )),
            analytics: Arc::new(AnalyticsService::new(Arc::clone(&store))),
            categories: Arc::new(CategoryService::new(store, queue.default_service.clone())),
        }
    }
}

// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes without the outer HTTP layers (CORS, tracing, request ids)
pub fn api_routes(services: &AppServices) -> Router {
    Router::new()
        .merge(tickets_routes::routes(Arc::clone(&services.tickets)))
        .merge(serving_routes::routes(Arc::clone(&services.serving)))
        .merge(analytics_routes::routes(Arc::clone(&services.analytics)))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_health_check() {
        let server = test_server();
        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = test_server();
        let response = server.get("/api/tickets").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
