#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::core::config::QueueConfig;
#[cfg(test)]
use crate::core::router::{api_routes, AppServices};
#[cfg(test)]
use crate::modules::queue_store::QueueStore;

/// Two-service configuration used across tests: "billing" (default) and "support"
#[cfg(test)]
pub fn test_queue_config() -> QueueConfig {
    QueueConfig::build("billing,support", None, 10, false).unwrap()
}

/// Test server over the API routes backed by a fresh queue store
#[cfg(test)]
pub fn test_server() -> TestServer {
    let config = test_queue_config();
    let services = AppServices::new(Arc::new(QueueStore::new(&config)), &config);
    TestServer::new(api_routes(&services)).unwrap()
}
