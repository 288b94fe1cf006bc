use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Region model, top level of the Senegalese administrative hierarchy
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct Region {
    pub id: i64,
    pub name: String,
    /// Short code (e.g. "DK"), empty for legacy rows
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
