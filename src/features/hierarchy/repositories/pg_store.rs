use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::hierarchy::models::{Commune, Departement, EntityKind, Region};
use crate::features::hierarchy::repositories::store::{HierarchyStore, Selection};
use crate::shared::types::{Page, PageRequest};

const REGION_COLUMNS: &str = "id, name, code, created_at, updated_at";
const DEPARTEMENT_COLUMNS: &str = "id, name, region_id, created_at, updated_at";
const COMMUNE_COLUMNS: &str =
    "id, name, departement_id, lat, lon, elevation, created_at, updated_at";

// "C" collation gives byte order, independent of the database locale
const ORDER_BY_NAME: &str = r#" ORDER BY name COLLATE "C" ASC, id ASC"#;

/// Hierarchy store backed by PostgreSQL
pub struct PgHierarchyStore {
    pool: PgPool,
}

impl PgHierarchyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch<T>(
        &self,
        kind: EntityKind,
        columns: &str,
        selection: &Selection,
    ) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {}", columns, kind.table()));
        if !push_selection(&mut builder, kind, selection) {
            return Ok(Vec::new());
        }
        builder.push(ORDER_BY_NAME);

        builder
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} ({:?}): {:?}", kind.table(), selection, e);
                AppError::Database(e)
            })
    }
}

/// Postgres column holding the parent id, regions have none
fn parent_column(kind: EntityKind) -> Option<&'static str> {
    match kind {
        EntityKind::Region => None,
        EntityKind::Departement => Some("region_id"),
        EntityKind::Commune => Some("departement_id"),
    }
}

/// Append the WHERE clause. Returns false when the selection can match no row.
fn push_selection(
    builder: &mut QueryBuilder<'_, Postgres>,
    kind: EntityKind,
    selection: &Selection,
) -> bool {
    match selection {
        Selection::All => {}
        Selection::Ids(ids) => {
            builder.push(" WHERE id = ANY(").push_bind(ids.clone()).push(")");
        }
        Selection::Parents(ids) => match parent_column(kind) {
            Some(column) => {
                builder
                    .push(format!(" WHERE {} = ANY(", column))
                    .push_bind(ids.clone())
                    .push(")");
            }
            None => return false,
        },
        Selection::NameContains(term) => {
            builder
                .push(" WHERE name ILIKE ")
                .push_bind(contains_pattern(term));
        }
    }
    true
}

/// `%term%` with LIKE metacharacters escaped (backslash is the default escape)
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl HierarchyStore for PgHierarchyStore {
    async fn regions(&self, selection: &Selection) -> Result<Vec<Region>> {
        self.fetch(EntityKind::Region, REGION_COLUMNS, selection).await
    }

    async fn departements(&self, selection: &Selection) -> Result<Vec<Departement>> {
        self.fetch(EntityKind::Departement, DEPARTEMENT_COLUMNS, selection)
            .await
    }

    async fn communes(&self, selection: &Selection) -> Result<Vec<Commune>> {
        self.fetch(EntityKind::Commune, COMMUNE_COLUMNS, selection).await
    }

    async fn communes_page(
        &self,
        selection: &Selection,
        page: PageRequest,
    ) -> Result<Page<Commune>> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM communes");
        push_selection(&mut count_query, EntityKind::Commune, selection);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count communes ({:?}): {:?}", selection, e);
                AppError::Database(e)
            })?;

        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM communes", COMMUNE_COLUMNS));
        push_selection(&mut query, EntityKind::Commune, selection);
        query
            .push(ORDER_BY_NAME)
            .push(" LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());

        let items = query
            .build_query_as::<Commune>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch communes page {:?}: {:?}", page, e);
                AppError::Database(e)
            })?;

        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    async fn count(&self, kind: EntityKind) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", kind.table()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", kind.table(), e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_term() {
        assert_eq!(contains_pattern("dakar"), "%dakar%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("xyz_99"), r"%xyz\_99%");
        assert_eq!(contains_pattern("50%"), r"%50\%%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_selection_sql() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM communes");
        assert!(push_selection(
            &mut builder,
            EntityKind::Commune,
            &Selection::parent(3)
        ));
        assert_eq!(
            builder.sql(),
            "SELECT id FROM communes WHERE departement_id = ANY($1)"
        );

        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM regions");
        assert!(!push_selection(
            &mut builder,
            EntityKind::Region,
            &Selection::parent(3)
        ));
    }

    #[test]
    fn test_selection_sql_by_ids() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM departements");
        assert!(push_selection(
            &mut builder,
            EntityKind::Departement,
            &Selection::Ids(vec![1, 2])
        ));
        assert_eq!(
            builder.sql(),
            "SELECT id FROM departements WHERE id = ANY($1)"
        );
    }

    #[test]
    fn test_selection_sql_by_name() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM regions");
        assert!(push_selection(
            &mut builder,
            EntityKind::Region,
            &Selection::NameContains("saint".to_string())
        ));
        builder.push(ORDER_BY_NAME);
        assert_eq!(
            builder.sql(),
            r#"SELECT id FROM regions WHERE name ILIKE $1 ORDER BY name COLLATE "C" ASC, id ASC"#
        );
    }

    #[test]
    fn test_unfiltered_selection_is_ordered_by_name() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM communes");
        assert!(push_selection(
            &mut builder,
            EntityKind::Commune,
            &Selection::All
        ));
        builder.push(ORDER_BY_NAME);
        assert_eq!(
            builder.sql(),
            r#"SELECT id FROM communes ORDER BY name COLLATE "C" ASC, id ASC"#
        );
    }
}
