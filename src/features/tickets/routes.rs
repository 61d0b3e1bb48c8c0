use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
///
/// Note: This feature is public (kiosk endpoints)
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route("/api/ticket", post(handlers::create_ticket))
        .route("/api/status/{id}", get(handlers::get_status))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::{body::Bytes, http::StatusCode};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_create_ticket_then_status() {
        let server = test_server();

        let response = server
            .post("/api/ticket")
            .json(&json!({ "name": "Ana", "service": "billing", "priority": 0 }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["position"], 1);
        assert_eq!(body["wait_time"], 0);
        assert_eq!(body["customer"], "Ana");

        let id = body["ticket_id"].as_str().unwrap().to_string();
        let response = server.get(&format!("/api/status/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["position"], 1);
        assert_eq!(body["service"], "billing");
    }

    #[tokio::test]
    async fn test_priority_ticket_moves_ahead() {
        let server = test_server();

        let a: Value = server
            .post("/api/ticket")
            .json(&json!({ "name": "A", "service": "billing", "priority": 0 }))
            .await
            .json();
        let b: Value = server
            .post("/api/ticket")
            .json(&json!({ "name": "B", "service": "billing", "priority": 5 }))
            .await
            .json();
        assert_eq!(b["position"], 1);

        let status: Value = server
            .get(&format!("/api/status/{}", a["ticket_id"].as_str().unwrap()))
            .await
            .json();
        assert_eq!(status["position"], 2);
        assert_eq!(status["wait_time"], 10);
        assert_eq!(status["status"], "pending");
    }

    #[tokio::test]
    async fn test_invalid_service_is_client_error() {
        let server = test_server();

        let response = server
            .post("/api/ticket")
            .json(&json!({ "name": "A", "service": "bakery" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("bakery"));
    }

    #[tokio::test]
    async fn test_negative_priority_is_rejected() {
        let server = test_server();

        let response = server
            .post("/api/ticket")
            .json(&json!({ "service": "billing", "priority": -5 }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let server = test_server();

        let response = server
            .post("/api/ticket")
            .bytes(Bytes::from_static(b"{not json"))
            .content_type("application/json")
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_duplicate_user_is_conflict() {
        let server = test_server();
        let request = json!({ "user_id": "u1", "service": "billing" });

        let first = server.post("/api/ticket").json(&request).await;
        assert_eq!(first.status_code(), StatusCode::OK);
        let second = server.post("/api/ticket").json(&request).await;
        assert_eq!(second.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_anonymous_ticket_never_conflicts_with_client_ids() {
        let server = test_server();

        let first = server
            .post("/api/ticket")
            .json(&json!({ "user_id": "guest-1", "service": "billing" }))
            .await;
        assert_eq!(first.status_code(), StatusCode::OK);

        let response = server
            .post("/api/ticket")
            .json(&json!({ "name": "Anon", "service": "billing" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["position"], 2);
        assert_eq!(body["customer"], "Anon");
    }

    #[tokio::test]
    async fn test_unknown_status_is_not_found() {
        let server = test_server();

        let response = server.get("/api/status/TKT-424242").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
