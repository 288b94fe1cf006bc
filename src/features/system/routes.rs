use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::system::handlers::{self, SystemState};

pub fn routes(state: Arc<SystemState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .with_state(state)
}
