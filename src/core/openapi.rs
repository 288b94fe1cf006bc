use axum::response::Html;
use utoipa::{Modify, OpenApi};

use crate::features::hierarchy::{dtos as hierarchy_dtos, handlers as hierarchy_handlers};
use crate::features::hierarchy::models::EntityKind;
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{ApiErrorResponse, PaginationMeta};

/// Path the generated OpenAPI document is served at
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::welcome,
        system_handlers::health,
        // Regions
        hierarchy_handlers::list_regions,
        hierarchy_handlers::get_region,
        hierarchy_handlers::list_region_departements,
        hierarchy_handlers::get_region_departement,
        // Departements
        hierarchy_handlers::list_departements,
        hierarchy_handlers::get_departement,
        hierarchy_handlers::list_departement_communes,
        // Communes
        hierarchy_handlers::list_communes,
        hierarchy_handlers::get_commune,
        // Search
        search_handlers::search,
        // Stats
        stats_handlers::get_stats,
    ),
    components(
        schemas(
            // Envelopes
            ApiErrorResponse,
            PaginationMeta,
            // System
            system_dtos::WelcomeDto,
            system_dtos::HealthDto,
            // Hierarchy
            EntityKind,
            hierarchy_dtos::RegionDto,
            hierarchy_dtos::DepartementDto,
            hierarchy_dtos::CommuneDto,
            hierarchy_dtos::RegionWithDepartementsDto,
            hierarchy_dtos::DepartementWithCommunesDto,
            hierarchy_dtos::DepartementWithRegionDto,
            hierarchy_dtos::CommuneWithHierarchyDto,
            hierarchy_dtos::RegionTreeDto,
            hierarchy_dtos::RegionSummaryDto,
            hierarchy_dtos::RegionDepartementDetailDto,
            // Search
            search_dtos::SearchResultGroupsDto,
            search_dtos::SearchResultsDto,
            // Stats
            stats_dtos::StatsDto,
        )
    ),
    tags(
        (name = "system", description = "Welcome message and health check"),
        (name = "regions", description = "Régions and their departements"),
        (name = "departements", description = "Départements and their communes"),
        (name = "communes", description = "Communes with their full hierarchy"),
        (name = "search", description = "Name search across the three levels"),
        (name = "stats", description = "Aggregate counts")
    ),
    info(
        title = "API Découpage Administratif du Sénégal",
        version = "1.0.0",
        description = "API REST pour accéder aux régions, départements et communes du Sénégal."
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Redoc page rendering the OpenAPI document
pub fn redoc_page(title: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>body {{ margin: 0; padding: 0; }}</style>
  </head>
  <body>
    <redoc spec-url="{spec_url}"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#,
        title = title,
        spec_url = OPENAPI_JSON_PATH,
    ))
}
