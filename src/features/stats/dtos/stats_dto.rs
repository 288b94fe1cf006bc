use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row counts of the three hierarchy levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = Stats)]
pub struct StatsDto {
    #[schema(example = 14)]
    pub regions: i64,
    #[schema(example = 46)]
    pub departements: i64,
    pub communes: i64,
}
