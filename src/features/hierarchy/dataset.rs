//! Reference dataset of the Senegalese administrative hierarchy.
//!
//! The JSON file is compiled into the binary. It feeds the Postgres seeder
//! and the in-memory store, which both assign ids in file order starting at 1.

use std::collections::HashSet;

use serde::Deserialize;

use crate::core::error::{AppError, Result};

const BUNDLED_DATASET: &str = include_str!("../../../data/senegal.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub regions: Vec<RegionSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionSeed {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub departements: Vec<DepartementSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartementSeed {
    pub name: String,
    #[serde(default)]
    pub communes: Vec<CommuneSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommuneSeed {
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    pub elevation: Option<i32>,
}

impl Dataset {
    /// The dataset shipped with the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)
            .map_err(|e| AppError::Internal(format!("Invalid hierarchy dataset: {}", e)))?;
        dataset.check()?;
        Ok(dataset)
    }

    pub fn departement_count(&self) -> usize {
        self.regions.iter().map(|r| r.departements.len()).sum()
    }

    pub fn commune_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| &r.departements)
            .map(|d| d.communes.len())
            .sum()
    }

    /// Names must be non-empty and non-empty region codes unique
    fn check(&self) -> Result<()> {
        let mut codes = HashSet::new();

        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err(invalid("region with an empty name"));
            }
            if !region.code.is_empty() && !codes.insert(region.code.as_str()) {
                return Err(invalid(&format!("duplicate region code '{}'", region.code)));
            }
            for departement in &region.departements {
                if departement.name.trim().is_empty() {
                    return Err(invalid(&format!(
                        "departement with an empty name in region '{}'",
                        region.name
                    )));
                }
                if departement.communes.iter().any(|c| c.name.trim().is_empty()) {
                    return Err(invalid(&format!(
                        "commune with an empty name in departement '{}'",
                        departement.name
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(detail: &str) -> AppError {
    AppError::Internal(format!("Invalid hierarchy dataset: {}", detail))
}
