use std::sync::Arc;

use crate::core::error::Result;
use crate::features::hierarchy::models::EntityKind;
use crate::features::hierarchy::HierarchyStore;
use crate::features::stats::dtos::StatsDto;

pub struct StatsService {
    store: Arc<dyn HierarchyStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn HierarchyStore>) -> Self {
        Self { store }
    }

    /// Exact counts, computed on every call
    pub async fn stats(&self) -> Result<StatsDto> {
        let (regions, departements, communes) = tokio::try_join!(
            self.store.count(EntityKind::Region),
            self.store.count(EntityKind::Departement),
            self.store.count(EntityKind::Commune),
        )?;

        Ok(StatsDto {
            regions,
            departements,
            communes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hierarchy::Dataset;
    use crate::shared::test_helpers::bundled_store;

    #[tokio::test]
    async fn test_stats_match_bundled_dataset() {
        let dataset = Dataset::bundled().unwrap();
        let stats = StatsService::new(bundled_store()).stats().await.unwrap();

        assert_eq!(stats.regions, 14);
        assert_eq!(stats.departements, dataset.departement_count() as i64);
        assert_eq!(stats.communes, dataset.commune_count() as i64);
    }
}
