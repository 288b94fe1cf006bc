use std::sync::Arc;

use crate::core::error::Result;
use crate::features::hierarchy::models::EntityKind;
use crate::features::hierarchy::HierarchyService;
use crate::features::search::dtos::{SearchCriteria, SearchResultGroupsDto, SearchResultsDto};

/// Cross-entity substring search over the hierarchy
pub struct SearchService {
    hierarchy: Arc<HierarchyService>,
}

impl SearchService {
    pub fn new(hierarchy: Arc<HierarchyService>) -> Self {
        Self { hierarchy }
    }

    /// Search one entity when `kind` is set, otherwise all three concurrently.
    ///
    /// Any failing branch fails the whole search.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResultsDto> {
        let term = criteria.term.as_str();

        let results = match criteria.kind {
            Some(EntityKind::Region) => SearchResultGroupsDto {
                regions: Some(self.hierarchy.search_regions(term).await?),
                ..Default::default()
            },
            Some(EntityKind::Departement) => SearchResultGroupsDto {
                departements: Some(self.hierarchy.search_departements(term).await?),
                ..Default::default()
            },
            Some(EntityKind::Commune) => SearchResultGroupsDto {
                communes: Some(self.hierarchy.search_communes(term).await?),
                ..Default::default()
            },
            None => {
                let (regions, departements, communes) = tokio::try_join!(
                    self.hierarchy.search_regions(term),
                    self.hierarchy.search_departements(term),
                    self.hierarchy.search_communes(term),
                )?;

                SearchResultGroupsDto {
                    regions: Some(regions),
                    departements: Some(departements),
                    communes: Some(communes),
                }
            }
        };

        tracing::debug!(
            term = %term,
            kind = ?criteria.kind,
            matches = results.match_count(),
            "Search completed"
        );

        Ok(SearchResultsDto::new(criteria.term.clone(), results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::bundled_store;

    fn service() -> SearchService {
        SearchService::new(Arc::new(HierarchyService::new(bundled_store())))
    }

    fn criteria(term: &str, kind: Option<EntityKind>) -> SearchCriteria {
        SearchCriteria {
            term: term.to_string(),
            kind,
        }
    }

    #[tokio::test]
    async fn test_search_all_entities() {
        let results = service().search(&criteria("dakar", None)).await.unwrap();

        let regions = results.results.regions.as_ref().unwrap();
        let departements = results.results.departements.as_ref().unwrap();
        let communes = results.results.communes.as_ref().unwrap();

        assert_eq!(results.query, "dakar");
        assert_eq!(regions.len(), 1);
        assert_eq!(departements.len(), 1);
        assert!(!communes.is_empty());
        assert_eq!(
            results.total,
            regions.len() + departements.len() + communes.len()
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = service();
        let lower = service.search(&criteria("saint", None)).await.unwrap();
        let upper = service.search(&criteria("SAINT", None)).await.unwrap();

        assert_eq!(lower.results, upper.results);
        assert_eq!(lower.results.regions.unwrap()[0].name, "Saint-Louis");
    }

    #[tokio::test]
    async fn test_search_with_type_only_returns_that_group() {
        let results = service()
            .search(&criteria("dakar", Some(EntityKind::Commune)))
            .await
            .unwrap();

        assert!(results.results.regions.is_none());
        assert!(results.results.departements.is_none());
        let communes = results.results.communes.unwrap();
        assert_eq!(results.total, communes.len());
        assert!(communes
            .iter()
            .all(|c| c.name.to_lowercase().contains("dakar")));
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let results = service().search(&criteria("%%", None)).await.unwrap();
        assert_eq!(results.total, 0);
    }
}
