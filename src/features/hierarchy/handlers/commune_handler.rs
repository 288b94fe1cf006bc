use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::hierarchy::dtos::{CommuneDto, CommuneListQuery, CommuneWithHierarchyDto};
use crate::features::hierarchy::services::HierarchyService;
use crate::shared::types::{ApiErrorResponse, ApiResponse};
use crate::shared::validation::{parse_optional_id, parse_pagination, parse_positive_id};

// ==================== Commune Handlers ====================

/// List communes, optionally filtered by departement.
///
/// Without `page` the whole listing is returned. With `page`, one slice is
/// returned and `meta` carries the totals.
#[utoipa::path(
    get,
    path = "/api/v1/communes",
    params(CommuneListQuery),
    responses(
        (status = 200, description = "Communes ordered by name", body = ApiResponse<Vec<CommuneDto>>),
        (status = 400, description = "Invalid departement_id, page or limit", body = ApiErrorResponse)
    ),
    tag = "communes"
)]
pub async fn list_communes(
    State(service): State<Arc<HierarchyService>>,
    AppQuery(query): AppQuery<CommuneListQuery>,
) -> Result<Json<ApiResponse<Vec<CommuneDto>>>> {
    let departement_id = parse_optional_id("departement_id", query.departement_id.as_deref())?;
    let pagination = parse_pagination(query.page.as_deref(), query.limit.as_deref())?;

    match pagination {
        Some(request) => {
            let page = service.list_communes_page(departement_id, request).await?;
            let meta = page.meta();
            Ok(Json(ApiResponse::success(page.items).with_meta(meta)))
        }
        None => {
            let communes = service.list_communes(departement_id).await?;
            Ok(Json(ApiResponse::success(communes)))
        }
    }
}

/// Get a commune with its departement and region
#[utoipa::path(
    get,
    path = "/api/v1/communes/{id}",
    params(
        ("id" = i64, Path, description = "Commune id")
    ),
    responses(
        (status = 200, description = "Commune with its hierarchy", body = ApiResponse<CommuneWithHierarchyDto>),
        (status = 400, description = "Invalid id", body = ApiErrorResponse),
        (status = 404, description = "Commune not found", body = ApiErrorResponse)
    ),
    tag = "communes"
)]
pub async fn get_commune(
    State(service): State<Arc<HierarchyService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<CommuneWithHierarchyDto>>> {
    let id = parse_positive_id("id", &id)?;
    let commune = service.get_commune_with_hierarchy(id).await?;
    Ok(Json(ApiResponse::success(commune)))
}
