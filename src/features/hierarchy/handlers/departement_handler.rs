use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::hierarchy::dtos::{
    CommuneDto, DepartementDto, DepartementListQuery, DepartementWithCommunesDto,
};
use crate::features::hierarchy::services::HierarchyService;
use crate::shared::types::{ApiErrorResponse, ApiResponse};
use crate::shared::validation::{parse_optional_id, parse_positive_id};

// ==================== Departement Handlers ====================

/// List departements, optionally filtered by region
#[utoipa::path(
    get,
    path = "/api/v1/departements",
    params(DepartementListQuery),
    responses(
        (status = 200, description = "Departements ordered by name", body = ApiResponse<Vec<DepartementDto>>),
        (status = 400, description = "Invalid region_id", body = ApiErrorResponse)
    ),
    tag = "departements"
)]
pub async fn list_departements(
    State(service): State<Arc<HierarchyService>>,
    AppQuery(query): AppQuery<DepartementListQuery>,
) -> Result<Json<ApiResponse<Vec<DepartementDto>>>> {
    let region_id = parse_optional_id("region_id", query.region_id.as_deref())?;
    let departements = service.list_departements(region_id).await?;
    Ok(Json(ApiResponse::success(departements)))
}

/// Get a departement with its communes
#[utoipa::path(
    get,
    path = "/api/v1/departements/{id}",
    params(
        ("id" = i64, Path, description = "Departement id")
    ),
    responses(
        (status = 200, description = "Departement details", body = ApiResponse<DepartementWithCommunesDto>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Departement not found", body = ApiErrorResponse)
    ),
    tag = "departements"
)]
pub async fn get_departement(
    State(service): State<Arc<HierarchyService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<DepartementWithCommunesDto>>> {
    let id = parse_positive_id("id", &id)?;
    let departement = service.get_departement_with_communes(id).await?;
    Ok(Json(ApiResponse::success(departement)))
}

/// List the communes of a departement
#[utoipa::path(
    get,
    path = "/api/v1/departements/{id}/communes",
    params(
        ("id" = i64, Path, description = "Departement id")
    ),
    responses(
        (status = 200, description = "Communes of the departement", body = ApiResponse<Vec<CommuneDto>>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Departement not found", body = ApiErrorResponse)
    ),
    tag = "departements"
)]
pub async fn list_departement_communes(
    State(service): State<Arc<HierarchyService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<CommuneDto>>>> {
    let id = parse_positive_id("id", &id)?;
    let communes = service.get_communes_of_departement(id).await?;
    Ok(Json(ApiResponse::success(communes)))
}
