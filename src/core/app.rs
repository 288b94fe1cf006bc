use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Json, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::route_not_found;
use crate::core::middleware;
use crate::core::openapi::{redoc_page, ApiDoc, SwaggerInfoModifier, OPENAPI_JSON_PATH};
use crate::features::hierarchy::{routes as hierarchy_routes, HierarchyService, HierarchyStore};
use crate::features::search::{routes as search_routes, SearchService};
use crate::features::stats::{routes as stats_routes, StatsService};
use crate::features::system::{routes as system_routes, SystemState};
use crate::shared::constants::API_PREFIX;

/// The service graph shared by every request
pub struct AppServices {
    pub hierarchy: Arc<HierarchyService>,
    pub search: Arc<SearchService>,
    pub stats: Arc<StatsService>,
    pub system: Arc<SystemState>,
}

impl AppServices {
    pub fn new(store: Arc<dyn HierarchyStore>) -> Self {
        let hierarchy = Arc::new(HierarchyService::new(Arc::clone(&store)));
        let search = Arc::new(SearchService::new(Arc::clone(&hierarchy)));
        let stats = Arc::new(StatsService::new(store));

        Self {
            hierarchy,
            search,
            stats,
            system: Arc::new(SystemState::new()),
        }
    }
}

/// Build the full application router with docs, fallback and HTTP layers
pub fn create_app(services: AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Swagger UI, optionally behind basic auth
    let swagger_ui = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi.clone()));
    let swagger_ui = match swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger_ui.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger_ui
        }
    };

    // Public OpenAPI document and Redoc page
    let redoc = redoc_page(&swagger.title);
    let docs_routes = Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .route("/docs", get(move || async move { redoc }));

    let api_routes = Router::new()
        .merge(hierarchy_routes::routes(services.hierarchy))
        .merge(search_routes::routes(services.search))
        .merge(stats_routes::routes(services.stats));

    Router::new()
        .merge(system_routes::routes(services.system))
        .merge(swagger_ui)
        .merge(docs_routes)
        .nest(API_PREFIX, api_routes)
        .fallback(route_not_found)
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hierarchy::Dataset;
    use crate::shared::test_helpers::{
        bundled_store, test_app_config, test_server, test_swagger_config,
    };
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_welcome_message() {
        let response = test_server().get("/").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["welcome"]
            .as_str()
            .unwrap()
            .contains("Découpage administratif du Sénégal"));
    }

    #[tokio::test]
    async fn test_welcome_message_describes_bundled_dataset() {
        let dataset = Dataset::bundled().unwrap();
        let body: Value = test_server().get("/").await.json();
        let welcome = body["welcome"].as_str().unwrap();

        assert!(welcome.contains(&format!("{} Régions", dataset.regions.len())));
        assert!(welcome.contains(&format!("{} Départements", dataset.departement_count())));
        assert!(welcome.contains("échantillon de Communes"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_secs"].as_f64().unwrap() >= 0.0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let server = test_server();

        for path in ["/nope", "/api/v1/villages", "/api/v1/regions/1/communes"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&serde_json::json!({
                "success": false,
                "message": "Route non trouvée.",
                "errors": null
            }));
        }
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = test_server().get("/api/v1/regions").await;

        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let response = test_server()
            .get("/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("client-supplied-id"),
            )
            .await;

        assert_eq!(
            response.headers()["x-request-id"].to_str().unwrap(),
            "client-supplied-id"
        );
    }

    #[tokio::test]
    async fn test_openapi_json_is_public() {
        let response = test_server().get("/api/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"]["/api/v1/regions"].is_object());
        assert!(body["components"]["schemas"]["CommuneWithHierarchy"].is_object());
    }

    #[tokio::test]
    async fn test_docs_page_is_html() {
        let response = test_server().get("/docs").await;

        response.assert_status_ok();
        assert!(response.text().contains("<redoc"));
    }

    #[tokio::test]
    async fn test_swagger_ui_requires_credentials_when_configured() {
        let mut swagger = test_swagger_config();
        swagger.username = Some("admin".to_string());
        swagger.password = Some("secret".to_string());

        let app = create_app(
            AppServices::new(bundled_store()),
            &test_app_config(),
            &swagger,
        );
        let server = TestServer::new(app).unwrap();

        server
            .get("/swagger-ui/")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        // The API and the raw document stay open
        server.get("/api/openapi.json").await.assert_status_ok();
        server.get("/api/v1/stats").await.assert_status_ok();
    }
}
