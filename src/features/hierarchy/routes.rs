use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hierarchy::handlers;
use crate::features::hierarchy::services::HierarchyService;

/// Create routes for the hierarchy feature, relative to the API prefix
pub fn routes(service: Arc<HierarchyService>) -> Router {
    Router::new()
        // Region routes
        .route("/regions", get(handlers::list_regions))
        .route("/regions/{id}", get(handlers::get_region))
        .route(
            "/regions/{id}/departements",
            get(handlers::list_region_departements),
        )
        .route(
            "/regions/{id}/departements/{departement_id}",
            get(handlers::get_region_departement),
        )
        // Departement routes
        .route("/departements", get(handlers::list_departements))
        .route("/departements/{id}", get(handlers::get_departement))
        .route(
            "/departements/{id}/communes",
            get(handlers::list_departement_communes),
        )
        // Commune routes
        .route("/communes", get(handlers::list_communes))
        .route("/communes/{id}", get(handlers::get_commune))
        .with_state(service)
}
