use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::hierarchy::dtos::{
    CommuneDto, CommuneWithHierarchyDto, DepartementDto, DepartementWithCommunesDto,
    DepartementWithRegionDto, RegionDepartementDetailDto, RegionDto, RegionSummaryDto,
    RegionTreeDto, RegionWithDepartementsDto,
};
use crate::features::hierarchy::models::{Commune, Departement, Region};
use crate::features::hierarchy::repositories::{HierarchyStore, Selection};
use crate::shared::types::{Page, PageRequest};

/// Read operations over the administrative hierarchy.
///
/// Each operation decides its nesting depth upfront and loads every level
/// with a single batched store call. Children keep the store's name order.
pub struct HierarchyService {
    store: Arc<dyn HierarchyStore>,
}

impl HierarchyService {
    pub fn new(store: Arc<dyn HierarchyStore>) -> Self {
        Self { store }
    }

    // ==================== Listings ====================

    pub async fn list_regions(&self) -> Result<Vec<RegionDto>> {
        let regions = self.store.regions(&Selection::All).await?;
        Ok(regions.into_iter().map(Into::into).collect())
    }

    /// A `region_id` that matches nothing yields an empty list
    pub async fn list_departements(&self, region_id: Option<i64>) -> Result<Vec<DepartementDto>> {
        let departements = self
            .store
            .departements(&Selection::parent_or_all(region_id))
            .await?;
        Ok(departements.into_iter().map(Into::into).collect())
    }

    /// A `departement_id` that matches nothing yields an empty list
    pub async fn list_communes(&self, departement_id: Option<i64>) -> Result<Vec<CommuneDto>> {
        let communes = self
            .store
            .communes(&Selection::parent_or_all(departement_id))
            .await?;
        Ok(communes.into_iter().map(Into::into).collect())
    }

    pub async fn list_communes_page(
        &self,
        departement_id: Option<i64>,
        page: PageRequest,
    ) -> Result<Page<CommuneDto>> {
        let page = self
            .store
            .communes_page(&Selection::parent_or_all(departement_id), page)
            .await?;
        Ok(page.map(Into::into))
    }

    // ==================== Single entities ====================

    /// Region with its departements, without communes
    pub async fn get_region_with_departements(&self, id: i64) -> Result<RegionWithDepartementsDto> {
        let region = self.find_region(id).await?;
        let departements = self.store.departements(&Selection::parent(id)).await?;

        Ok(RegionWithDepartementsDto::new(
            region,
            departements.into_iter().map(Into::into).collect(),
        ))
    }

    pub async fn get_departement_with_communes(
        &self,
        id: i64,
    ) -> Result<DepartementWithCommunesDto> {
        let departement = self.find_departement(id).await?;
        let communes = self.store.communes(&Selection::parent(id)).await?;

        Ok(DepartementWithCommunesDto::new(
            departement,
            communes.into_iter().map(Into::into).collect(),
        ))
    }

    pub async fn get_commune_with_hierarchy(&self, id: i64) -> Result<CommuneWithHierarchyDto> {
        let commune = self
            .store
            .communes(&Selection::id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Commune {} not found", id)))?;

        let mut shaped = self.attach_hierarchy(vec![commune]).await?;
        shaped
            .pop()
            .ok_or_else(|| AppError::Internal(format!("Commune {} lost its hierarchy", id)))
    }

    /// Departements of an existing region (404 when the region is unknown)
    pub async fn get_departements_of_region(&self, region_id: i64) -> Result<Vec<DepartementDto>> {
        self.find_region(region_id).await?;
        self.list_departements(Some(region_id)).await
    }

    /// Communes of an existing departement (404 when the departement is unknown)
    pub async fn get_communes_of_departement(
        &self,
        departement_id: i64,
    ) -> Result<Vec<CommuneDto>> {
        self.find_departement(departement_id).await?;
        self.list_communes(Some(departement_id)).await
    }

    /// A departement reached through its region.
    ///
    /// Fails with NotFound when either is missing or when the departement
    /// belongs to another region.
    pub async fn get_region_departement_detail(
        &self,
        region_id: i64,
        departement_id: i64,
    ) -> Result<RegionDepartementDetailDto> {
        let region = self.find_region(region_id).await?;
        let departement = self.find_departement(departement_id).await?;

        if departement.region_id != region.id {
            return Err(AppError::NotFound(format!(
                "Departement {} does not belong to region {}",
                departement_id, region_id
            )));
        }

        let communes = self.store.communes(&Selection::parent(departement_id)).await?;

        Ok(RegionDepartementDetailDto {
            region: RegionSummaryDto {
                id: region.id,
                name: region.name,
            },
            departement: DepartementWithCommunesDto::new(
                departement,
                communes.into_iter().map(Into::into).collect(),
            ),
        })
    }

    // ==================== Search shapes ====================

    /// Regions whose name contains `term`, with departements and their communes
    pub async fn search_regions(&self, term: &str) -> Result<Vec<RegionTreeDto>> {
        let regions = self
            .store
            .regions(&Selection::NameContains(term.to_string()))
            .await?;
        if regions.is_empty() {
            return Ok(Vec::new());
        }

        let region_ids = regions.iter().map(|r| r.id).collect();
        let departements = self
            .store
            .departements(&Selection::Parents(region_ids))
            .await?;
        let mut departements_by_region =
            group_by(self.attach_communes(departements).await?, |d| d.region_id);

        Ok(regions
            .into_iter()
            .map(|region| {
                let departements = departements_by_region.remove(&region.id).unwrap_or_default();
                RegionTreeDto::new(region, departements)
            })
            .collect())
    }

    /// Departements whose name contains `term`, with their communes
    pub async fn search_departements(&self, term: &str) -> Result<Vec<DepartementWithCommunesDto>> {
        let departements = self
            .store
            .departements(&Selection::NameContains(term.to_string()))
            .await?;
        self.attach_communes(departements).await
    }

    /// Communes whose name contains `term`, with departement and region
    pub async fn search_communes(&self, term: &str) -> Result<Vec<CommuneWithHierarchyDto>> {
        let communes = self
            .store
            .communes(&Selection::NameContains(term.to_string()))
            .await?;
        self.attach_hierarchy(communes).await
    }

    // ==================== Helpers ====================

    async fn find_region(&self, id: i64) -> Result<Region> {
        self.store
            .regions(&Selection::id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Region {} not found", id)))
    }

    async fn find_departement(&self, id: i64) -> Result<Departement> {
        self.store
            .departements(&Selection::id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Departement {} not found", id)))
    }

    /// Preload the communes of every departement with one store call
    async fn attach_communes(
        &self,
        departements: Vec<Departement>,
    ) -> Result<Vec<DepartementWithCommunesDto>> {
        if departements.is_empty() {
            return Ok(Vec::new());
        }

        let ids = departements.iter().map(|d| d.id).collect();
        let communes = self.store.communes(&Selection::Parents(ids)).await?;
        let mut communes_by_departement = group_by(communes, |c| c.departement_id);

        Ok(departements
            .into_iter()
            .map(|departement| {
                let communes = communes_by_departement
                    .remove(&departement.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect();
                DepartementWithCommunesDto::new(departement, communes)
            })
            .collect())
    }

    /// Preload departement and region of every commune, two store calls total
    async fn attach_hierarchy(
        &self,
        communes: Vec<Commune>,
    ) -> Result<Vec<CommuneWithHierarchyDto>> {
        if communes.is_empty() {
            return Ok(Vec::new());
        }

        let departement_ids = unique(communes.iter().map(|c| c.departement_id));
        let departements: HashMap<i64, Departement> = self
            .store
            .departements(&Selection::Ids(departement_ids))
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let region_ids = unique(departements.values().map(|d| d.region_id));
        let regions: HashMap<i64, Region> = self
            .store
            .regions(&Selection::Ids(region_ids))
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        communes
            .into_iter()
            .map(|commune| {
                let departement = departements.get(&commune.departement_id).ok_or_else(|| {
                    AppError::Internal(format!(
                        "Commune {} references missing departement {}",
                        commune.id, commune.departement_id
                    ))
                })?;
                let region = regions.get(&departement.region_id).ok_or_else(|| {
                    AppError::Internal(format!(
                        "Departement {} references missing region {}",
                        departement.id, departement.region_id
                    ))
                })?;

                let departement =
                    DepartementWithRegionDto::new(departement.clone(), region.clone());
                Ok(CommuneWithHierarchyDto::new(commune, departement))
            })
            .collect()
    }
}

/// Group rows by key, keeping their relative order
fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}

fn unique(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::bundled_store;

    fn service() -> HierarchyService {
        HierarchyService::new(bundled_store())
    }

    fn is_sorted(names: &[&str]) -> bool {
        names.windows(2).all(|w| w[0] <= w[1])
    }

    #[tokio::test]
    async fn test_region_detail_has_departements_but_no_communes() {
        let region = service().get_region_with_departements(1).await.unwrap();

        assert_eq!(region.name, "Dakar");
        assert!(!region.departements.is_empty());
        assert!(region.departements.iter().all(|d| d.region_id == 1));
        let names: Vec<&str> = region.departements.iter().map(|d| d.name.as_str()).collect();
        assert!(is_sorted(&names));

        let json = serde_json::to_value(&region).unwrap();
        assert!(json["departements"][0].get("communes").is_none());
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let service = service();

        assert!(matches!(
            service.get_region_with_departements(999_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_departement_with_communes(999_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_commune_with_hierarchy(999_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_departements_of_region(999_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_communes_of_departement(999_999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_filters_on_unknown_parents_are_empty() {
        let service = service();

        assert!(service.list_departements(Some(999_999)).await.unwrap().is_empty());
        assert!(service.list_communes(Some(999_999)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ownership_check_rejects_foreign_departement() {
        let service = service();
        let foreign = service.list_departements(Some(1)).await.unwrap()[0].id;

        assert!(service.get_region_departement_detail(1, foreign).await.is_ok());
        assert!(matches!(
            service.get_region_departement_detail(2, foreign).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_region_departement_detail_shape() {
        let detail = service().get_region_departement_detail(1, 1).await.unwrap();

        assert_eq!(detail.region.id, 1);
        assert_eq!(detail.departement.id, 1);
        assert!(detail.departement.communes.iter().all(|c| c.departement_id == 1));
    }

    #[tokio::test]
    async fn test_commune_hierarchy_is_consistent() {
        let service = service();
        let commune = service.get_commune_with_hierarchy(1).await.unwrap();

        assert_eq!(commune.departement_id, commune.departement.id);
        assert_eq!(commune.departement.region_id, commune.departement.region.id);

        let departement = service
            .get_departement_with_communes(commune.departement_id)
            .await
            .unwrap();
        assert_eq!(departement.name, commune.departement.name);
        assert!(departement.communes.iter().any(|c| c.id == commune.id));
    }

    #[tokio::test]
    async fn test_search_regions_nests_every_level_in_order() {
        let regions = service().search_regions("dakar").await.unwrap();

        assert_eq!(regions.len(), 1);
        let names: Vec<&str> = regions[0].departements.iter().map(|d| d.name.as_str()).collect();
        assert!(is_sorted(&names));
        for departement in &regions[0].departements {
            assert!(!departement.communes.is_empty());
            let names: Vec<&str> = departement.communes.iter().map(|c| c.name.as_str()).collect();
            assert!(is_sorted(&names));
        }
    }

    #[tokio::test]
    async fn test_search_communes_carries_hierarchy() {
        let communes = service().search_communes("plateau").await.unwrap();

        assert!(!communes.is_empty());
        assert!(communes
            .iter()
            .all(|c| c.name.to_lowercase().contains("plateau")));
        assert_eq!(communes[0].departement.region.name, "Dakar");
    }

    #[tokio::test]
    async fn test_communes_page_matches_full_listing() {
        let service = service();
        let all = service.list_communes(None).await.unwrap();

        let first = service
            .list_communes_page(None, PageRequest { page: 1, limit: 10 })
            .await
            .unwrap();
        let second = service
            .list_communes_page(None, PageRequest { page: 2, limit: 10 })
            .await
            .unwrap();

        assert_eq!(first.total, all.len() as i64);
        assert_eq!(first.items, all[..10].to_vec());
        assert_eq!(second.items, all[10..20].to_vec());
    }
}
