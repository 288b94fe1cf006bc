use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Welcome)]
pub struct WelcomeDto {
    pub welcome: String,
}

/// Liveness probe payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Health)]
pub struct HealthDto {
    #[schema(example = "ok")]
    pub status: String,
    /// Seconds since the process started serving
    pub uptime_secs: f64,
    pub timestamp: DateTime<Utc>,
}
