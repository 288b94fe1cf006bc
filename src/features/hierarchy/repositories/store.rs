use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::hierarchy::models::{Commune, Departement, EntityKind, Region};
use crate::shared::types::{Page, PageRequest};

/// Which rows of a hierarchy table to read
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Ids(Vec<i64>),
    /// Rows whose parent id is one of these. Regions are roots and never match.
    Parents(Vec<i64>),
    /// Case-insensitive substring match on `name`, wildcards taken literally
    NameContains(String),
}

impl Selection {
    pub fn id(id: i64) -> Self {
        Selection::Ids(vec![id])
    }

    pub fn parent(id: i64) -> Self {
        Selection::Parents(vec![id])
    }

    /// `Some(id)` narrows to one parent, `None` selects everything
    pub fn parent_or_all(parent_id: Option<i64>) -> Self {
        parent_id.map_or(Selection::All, Selection::parent)
    }
}

/// Read access to the region → departement → commune tree.
///
/// Every method returns rows ordered by `name` (byte order), ties broken by
/// `id`, so identical calls produce identical results.
#[async_trait]
pub trait HierarchyStore: Send + Sync {
    async fn regions(&self, selection: &Selection) -> Result<Vec<Region>>;

    async fn departements(&self, selection: &Selection) -> Result<Vec<Departement>>;

    async fn communes(&self, selection: &Selection) -> Result<Vec<Commune>>;

    /// One page of [`HierarchyStore::communes`], with the unpaginated total
    async fn communes_page(&self, selection: &Selection, page: PageRequest)
        -> Result<Page<Commune>>;

    /// Exact row count of one table
    async fn count(&self, kind: EntityKind) -> Result<i64>;
}
