use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::hierarchy::dataset::Dataset;
use crate::features::hierarchy::models::{Commune, Departement, EntityKind, Region};
use crate::features::hierarchy::repositories::store::{HierarchyStore, Selection};
use crate::shared::types::{Page, PageRequest};

/// Hierarchy held in memory, built once from a dataset and never mutated
pub struct InMemoryHierarchyStore {
    regions: Vec<Region>,
    departements: Vec<Departement>,
    communes: Vec<Commune>,
}

impl InMemoryHierarchyStore {
    /// Ids are assigned per table in dataset order, starting at 1,
    /// exactly like the Postgres seeder.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let now = Utc::now();
        let mut regions = Vec::with_capacity(dataset.regions.len());
        let mut departements = Vec::with_capacity(dataset.departement_count());
        let mut communes = Vec::with_capacity(dataset.commune_count());

        for region_seed in &dataset.regions {
            let region_id = regions.len() as i64 + 1;
            regions.push(Region {
                id: region_id,
                name: region_seed.name.clone(),
                code: region_seed.code.clone(),
                created_at: now,
                updated_at: now,
            });

            for departement_seed in &region_seed.departements {
                let departement_id = departements.len() as i64 + 1;
                departements.push(Departement {
                    id: departement_id,
                    name: departement_seed.name.clone(),
                    region_id,
                    created_at: now,
                    updated_at: now,
                });

                for commune_seed in &departement_seed.communes {
                    communes.push(Commune {
                        id: communes.len() as i64 + 1,
                        name: commune_seed.name.clone(),
                        departement_id,
                        lat: commune_seed.lat,
                        lon: commune_seed.lon,
                        elevation: commune_seed.elevation,
                        created_at: now,
                        updated_at: now,
                    });
                }
            }
        }

        Self {
            regions,
            departements,
            communes,
        }
    }
}

/// What the generic selection needs to know about a row
trait TreeRow: Clone {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn parent_id(&self) -> Option<i64>;
}

impl TreeRow for Region {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<i64> {
        None
    }
}

impl TreeRow for Departement {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<i64> {
        Some(self.region_id)
    }
}

impl TreeRow for Commune {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<i64> {
        Some(self.departement_id)
    }
}

fn select<T: TreeRow>(rows: &[T], selection: &Selection) -> Vec<T> {
    let needle = match selection {
        Selection::NameContains(term) => term.to_lowercase(),
        _ => String::new(),
    };

    let mut selected: Vec<T> = rows
        .iter()
        .filter(|row| match selection {
            Selection::All => true,
            Selection::Ids(ids) => ids.contains(&row.id()),
            Selection::Parents(ids) => row.parent_id().is_some_and(|p| ids.contains(&p)),
            Selection::NameContains(_) => row.name().to_lowercase().contains(&needle),
        })
        .cloned()
        .collect();

    selected.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
    selected
}

#[async_trait]
impl HierarchyStore for InMemoryHierarchyStore {
    async fn regions(&self, selection: &Selection) -> Result<Vec<Region>> {
        Ok(select(&self.regions, selection))
    }

    async fn departements(&self, selection: &Selection) -> Result<Vec<Departement>> {
        Ok(select(&self.departements, selection))
    }

    async fn communes(&self, selection: &Selection) -> Result<Vec<Commune>> {
        Ok(select(&self.communes, selection))
    }

    async fn communes_page(
        &self,
        selection: &Selection,
        page: PageRequest,
    ) -> Result<Page<Commune>> {
        let all = select(&self.communes, selection);
        let total = all.len() as i64;
        let items = all
            .into_iter()
            .skip(page.offset().try_into().unwrap_or(usize::MAX))
            .take(page.limit.try_into().unwrap_or(0))
            .collect();

        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    async fn count(&self, kind: EntityKind) -> Result<i64> {
        let count = match kind {
            EntityKind::Region => self.regions.len(),
            EntityKind::Departement => self.departements.len(),
            EntityKind::Commune => self.communes.len(),
        };
        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryHierarchyStore {
        let json = r#"{"regions": [
            {"name": "Thiès", "code": "TH", "departements": [
                {"name": "Thiès", "communes": [{"name": "Pout"}, {"name": "Khombole"}]},
                {"name": "Mbour", "communes": [{"name": "Mbour"}, {"name": "Joal-Fadiouth"}]}
            ]},
            {"name": "Dakar", "code": "DK", "departements": [
                {"name": "Dakar", "communes": [{"name": "Yoff"}, {"name": "Dakar-Plateau"}]}
            ]}
        ]}"#;
        InMemoryHierarchyStore::from_dataset(&Dataset::from_json(json).unwrap())
    }

    fn names<T: TreeRow>(rows: &[T]) -> Vec<&str> {
        rows.iter().map(TreeRow::name).collect()
    }

    #[tokio::test]
    async fn test_ids_follow_dataset_order() {
        let store = store();

        let regions = store.regions(&Selection::All).await.unwrap();
        assert_eq!(
            regions.iter().map(|r| (r.id, r.name.as_str())).collect::<Vec<_>>(),
            vec![(2, "Dakar"), (1, "Thiès")]
        );

        let communes = store.communes(&Selection::id(3)).await.unwrap();
        assert_eq!(names(&communes), vec!["Mbour"]);
        assert_eq!(communes[0].departement_id, 2);
    }

    #[tokio::test]
    async fn test_parent_selection_is_ordered_by_name() {
        let store = store();

        let departements = store.departements(&Selection::parent(1)).await.unwrap();
        assert_eq!(names(&departements), vec!["Mbour", "Thiès"]);

        let communes = store
            .communes(&Selection::Parents(vec![1, 2]))
            .await
            .unwrap();
        assert_eq!(
            names(&communes),
            vec!["Joal-Fadiouth", "Khombole", "Mbour", "Pout"]
        );
    }

    #[tokio::test]
    async fn test_regions_never_match_a_parent_selection() {
        let store = store();

        assert!(store.regions(&Selection::parent(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_search_is_case_insensitive_substring() {
        let store = store();

        let communes = store
            .communes(&Selection::NameContains("DAKAR".to_string()))
            .await
            .unwrap();
        assert_eq!(names(&communes), vec!["Dakar-Plateau"]);

        let departements = store
            .departements(&Selection::NameContains("hiè".to_string()))
            .await
            .unwrap();
        assert_eq!(names(&departements), vec!["Thiès"]);
    }

    #[tokio::test]
    async fn test_communes_page_slices_the_ordered_listing() {
        let store = store();

        let page = store
            .communes_page(&Selection::All, PageRequest { page: 2, limit: 4 })
            .await
            .unwrap();

        assert_eq!(page.total, 6);
        assert_eq!(names(&page.items), vec!["Pout", "Yoff"]);
    }

    #[tokio::test]
    async fn test_counts() {
        let store = store();

        assert_eq!(store.count(EntityKind::Region).await.unwrap(), 2);
        assert_eq!(store.count(EntityKind::Departement).await.unwrap(), 3);
        assert_eq!(store.count(EntityKind::Commune).await.unwrap(), 6);
    }
}
