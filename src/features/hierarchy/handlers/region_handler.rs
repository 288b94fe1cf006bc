use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::hierarchy::dtos::{
    DepartementDto, RegionDepartementDetailDto, RegionDto, RegionWithDepartementsDto,
};
use crate::features::hierarchy::services::HierarchyService;
use crate::shared::types::{ApiErrorResponse, ApiResponse};
use crate::shared::validation::parse_positive_id;

// ==================== Region Handlers ====================

/// List all regions
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    responses(
        (status = 200, description = "Regions ordered by name", body = ApiResponse<Vec<RegionDto>>),
        (status = 500, description = "Internal error", body = ApiErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<HierarchyService>>,
) -> Result<Json<ApiResponse<Vec<RegionDto>>>> {
    let regions = service.list_regions().await?;
    Ok(Json(ApiResponse::success(regions)))
}

/// Get a region with its departements
#[utoipa::path(
    get,
    path = "/api/v1/regions/{id}",
    params(
        ("id" = i64, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionWithDepartementsDto>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Region not found", body = ApiErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<HierarchyService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<RegionWithDepartementsDto>>> {
    let id = parse_positive_id("id", &id)?;
    let region = service.get_region_with_departements(id).await?;
    Ok(Json(ApiResponse::success(region)))
}

/// List the departements of a region
#[utoipa::path(
    get,
    path = "/api/v1/regions/{regionId}/departements",
    params(
        ("regionId" = i64, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "Departements of the region", body = ApiResponse<Vec<DepartementDto>>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Region not found", body = ApiErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_region_departements(
    State(service): State<Arc<HierarchyService>>,
    AppPath(region_id): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<DepartementDto>>>> {
    let region_id = parse_positive_id("regionId", &region_id)?;
    let departements = service.get_departements_of_region(region_id).await?;
    Ok(Json(ApiResponse::success(departements)))
}

/// Get a departement of a region, with its communes
#[utoipa::path(
    get,
    path = "/api/v1/regions/{regionId}/departements/{departementId}",
    params(
        ("regionId" = i64, Path, description = "Region id"),
        ("departementId" = i64, Path, description = "Departement id, must belong to the region")
    ),
    responses(
        (status = 200, description = "Region summary and departement details", body = ApiResponse<RegionDepartementDetailDto>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Region or departement not found", body = ApiErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_region_departement(
    State(service): State<Arc<HierarchyService>>,
    AppPath((region_id, departement_id)): AppPath<(String, String)>,
) -> Result<Json<ApiResponse<RegionDepartementDetailDto>>> {
    let region_id = parse_positive_id("regionId", &region_id)?;
    let departement_id = parse_positive_id("departementId", &departement_id)?;
    let detail = service
        .get_region_departement_detail(region_id, departement_id)
        .await?;
    Ok(Json(ApiResponse::success(detail)))
}
