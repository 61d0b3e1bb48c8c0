use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::serving::handlers;
use crate::features::serving::services::ServingService;

/// Create routes for the serving feature (counter staff)
pub fn routes(service: Arc<ServingService>) -> Router {
    Router::new()
        .route("/api/serve", post(handlers::serve_next))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_serve_next_returns_head_ticket() {
        let server = test_server();
        server
            .post("/api/ticket")
            .json(&json!({ "name": "A", "service": "billing", "priority": 0 }))
            .await;
        let b: Value = server
            .post("/api/ticket")
            .json(&json!({ "name": "B", "service": "billing", "priority": 5 }))
            .await
            .json();

        let response = server
            .post("/api/serve")
            .json(&json!({ "service": "billing" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["ticket"]["id"], b["ticket_id"]);
        assert_eq!(body["ticket"]["customer"], "B");
        assert_eq!(body["ticket"]["status"], "served");

        let status = server
            .get(&format!("/api/status/{}", b["ticket_id"].as_str().unwrap()))
            .await;
        assert_eq!(status.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_queue_is_flagged_not_failed() {
        let server = test_server();

        let response = server
            .post("/api/serve")
            .json(&json!({ "service": "support" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No customers waiting");
        assert!(body.get("ticket").is_none());
    }

    #[tokio::test]
    async fn test_unknown_service_is_client_error() {
        let server = test_server();

        let response = server
            .post("/api/serve")
            .json(&json!({ "service": "bakery" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
