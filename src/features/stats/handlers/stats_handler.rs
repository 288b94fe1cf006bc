use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::stats::dtos::StatsDto;
use crate::features::stats::services::StatsService;
use crate::shared::constants::MSG_STATS;
use crate::shared::types::{ApiErrorResponse, ApiResponse};

/// Count regions, departements and communes
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Global counts", body = ApiResponse<StatsDto>),
        (status = 500, description = "Internal error", body = ApiErrorResponse)
    ),
    tag = "stats"
)]
pub async fn get_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatsDto>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(stats).with_message(MSG_STATS)))
}
