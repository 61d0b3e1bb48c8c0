use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Note: This feature is public (kiosk service picker)
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/services", get(handlers::list_categories))
        .route("/api/services/{service}", get(handlers::get_category))
        .with_state(service)
}
