use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::features::system::dtos::{HealthDto, WelcomeDto};
use crate::shared::constants::MSG_WELCOME;

/// Process-wide facts reported by the health check
#[derive(Debug)]
pub struct SystemState {
    started_at: Instant,
}

impl SystemState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeDto)
    ),
    tag = "system"
)]
pub async fn welcome() -> Json<WelcomeDto> {
    Json(WelcomeDto {
        welcome: MSG_WELCOME.to_string(),
    })
}

/// Health check for uptime monitors
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<SystemState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        uptime_secs: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now(),
    })
}
