use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::hierarchy::dtos::{
    CommuneWithHierarchyDto, DepartementWithCommunesDto, RegionTreeDto,
};
use crate::features::hierarchy::models::EntityKind;
use crate::shared::constants::{MSG_SEARCH_TERM, MSG_SEARCH_TYPE};

/// Raw query parameters for `/search`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term, at least 2 characters once trimmed
    #[param(example = "dakar")]
    pub q: Option<String>,

    /// Restrict the search to one entity: `region`, `departement` or `commune`
    #[serde(rename = "type")]
    #[param(value_type = Option<EntityKind>)]
    pub kind: Option<String>,
}

/// Validated search request
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SearchCriteria {
    #[validate(length(min = 2, message = "Search term must be at least 2 characters"))]
    pub term: String,
    pub kind: Option<EntityKind>,
}

impl TryFrom<SearchQuery> for SearchCriteria {
    type Error = AppError;

    fn try_from(query: SearchQuery) -> Result<Self> {
        let term = query.q.as_deref().unwrap_or_default().trim().to_string();

        let kind = match query.kind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<EntityKind>()
                    .map_err(|_| AppError::InvalidParameter(MSG_SEARCH_TYPE.to_string()))?,
            ),
        };

        let criteria = Self { term, kind };
        criteria
            .validate()
            .map_err(|_| AppError::InvalidParameter(MSG_SEARCH_TERM.to_string()))?;

        Ok(criteria)
    }
}

/// Matches grouped by entity. Keys of entities that were not searched are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = SearchResultGroups)]
pub struct SearchResultGroupsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<RegionTreeDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departements: Option<Vec<DepartementWithCommunesDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communes: Option<Vec<CommuneWithHierarchyDto>>,
}

impl SearchResultGroupsDto {
    /// Number of top-level matches across present groups
    pub fn match_count(&self) -> usize {
        self.regions.as_ref().map_or(0, Vec::len)
            + self.departements.as_ref().map_or(0, Vec::len)
            + self.communes.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = SearchResults)]
pub struct SearchResultsDto {
    /// The trimmed search term
    #[schema(example = "dakar")]
    pub query: String,
    pub total: usize,
    pub results: SearchResultGroupsDto,
}

impl SearchResultsDto {
    pub fn new(query: String, results: SearchResultGroupsDto) -> Self {
        Self {
            query,
            total: results.match_count(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: Option<&str>, kind: Option<&str>) -> SearchQuery {
        SearchQuery {
            q: q.map(String::from),
            kind: kind.map(String::from),
        }
    }

    #[test]
    fn test_criteria_trims_term() {
        let criteria = SearchCriteria::try_from(query(Some("  dakar "), None)).unwrap();
        assert_eq!(criteria.term, "dakar");
        assert_eq!(criteria.kind, None);
    }

    #[test]
    fn test_criteria_rejects_short_or_missing_term() {
        for q in [None, Some(""), Some("a"), Some(" a  ")] {
            let err = SearchCriteria::try_from(query(q, None)).unwrap_err();
            assert!(matches!(err, AppError::InvalidParameter(ref m) if m == MSG_SEARCH_TERM));
        }
    }

    #[test]
    fn test_criteria_counts_characters_not_bytes() {
        assert!(SearchCriteria::try_from(query(Some("é"), None)).is_err());
        assert!(SearchCriteria::try_from(query(Some("éd"), None)).is_ok());
    }

    #[test]
    fn test_criteria_parses_type() {
        let criteria = SearchCriteria::try_from(query(Some("th"), Some("commune"))).unwrap();
        assert_eq!(criteria.kind, Some(EntityKind::Commune));

        let criteria = SearchCriteria::try_from(query(Some("th"), Some(""))).unwrap();
        assert_eq!(criteria.kind, None);
    }

    #[test]
    fn test_criteria_rejects_unknown_type() {
        let err = SearchCriteria::try_from(query(Some("th"), Some("village"))).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter(ref m) if m == MSG_SEARCH_TYPE));
    }

    #[test]
    fn test_results_omit_unsearched_groups() {
        let results = SearchResultsDto::new(
            "th".to_string(),
            SearchResultGroupsDto {
                communes: Some(Vec::new()),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["total"], 0);
        assert!(json["results"].get("communes").is_some());
        assert!(json["results"].get("regions").is_none());
        assert!(json["results"].get("departements").is_none());
    }
}
