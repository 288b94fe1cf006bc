use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use crate::core::app::{create_app, AppServices};
use crate::core::config::{AppConfig, SwaggerConfig};
use crate::features::hierarchy::{Dataset, HierarchyStore, InMemoryHierarchyStore};

/// In-memory store loaded with the bundled dataset
pub fn bundled_store() -> Arc<dyn HierarchyStore> {
    let dataset = Dataset::bundled().expect("bundled dataset is valid");
    Arc::new(InMemoryHierarchyStore::from_dataset(&dataset))
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
    }
}

/// Swagger config without basic auth
pub fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        username: None,
        password: None,
        title: "API Découpage Administratif du Sénégal".to_string(),
        version: "test".to_string(),
        description: "test".to_string(),
    }
}

/// The full application wired to [`bundled_store`]
pub fn test_app() -> Router {
    create_app(
        AppServices::new(bundled_store()),
        &test_app_config(),
        &test_swagger_config(),
    )
}

pub fn test_server() -> TestServer {
    TestServer::new(test_app()).expect("test server starts")
}
