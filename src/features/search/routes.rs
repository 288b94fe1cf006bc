use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::search::handlers;
use crate::features::search::services::SearchService;

pub fn routes(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .with_state(service)
}
