use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Departement model, child of exactly one region
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct Departement {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
