use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::search::dtos::{SearchCriteria, SearchQuery, SearchResultsDto};
use crate::features::search::services::SearchService;
use crate::shared::types::{ApiErrorResponse, ApiResponse};

/// Search regions, departements and communes by name
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches grouped by entity", body = ApiResponse<SearchResultsDto>),
        (status = 400, description = "Missing or too short term, or unknown type", body = ApiErrorResponse)
    ),
    tag = "search"
)]
pub async fn search(
    State(service): State<Arc<SearchService>>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResultsDto>>> {
    let criteria = SearchCriteria::try_from(query)?;
    let results = service.search(&criteria).await?;
    Ok(Json(ApiResponse::success(results)))
}
