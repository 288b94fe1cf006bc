use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Commune model, child of exactly one departement
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct Commune {
    pub id: i64,
    pub name: String,
    pub departement_id: i64,
    pub lat: f64,
    pub lon: f64,
    /// Metres above sea level, unknown for part of the dataset
    pub elevation: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
