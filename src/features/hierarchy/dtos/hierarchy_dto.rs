use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::hierarchy::models::{Commune, Departement, Region};

// ============================================================================
// Query parameters
// ============================================================================

/// Query parameters for listing departements
///
/// Values stay raw strings so validation can answer with the error envelope.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DepartementListQuery {
    /// Only departements of this region (positive integer)
    #[param(value_type = Option<i64>, example = 1)]
    pub region_id: Option<String>,
}

/// Query parameters for listing communes
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommuneListQuery {
    /// Only communes of this departement (positive integer)
    #[param(value_type = Option<i64>, example = 1)]
    pub departement_id: Option<String>,

    /// Page number (1-indexed). Pagination is enabled only when set.
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,

    /// Items per page (default: 100, max: 200)
    #[param(value_type = Option<i64>, minimum = 1, maximum = 200)]
    pub limit: Option<String>,
}

// ============================================================================
// Flat entities
// ============================================================================

/// Region without its departements
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = Region)]
pub struct RegionDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dakar")]
    pub name: String,
    #[schema(example = "DK")]
    pub code: String,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            name: region.name,
            code: region.code,
        }
    }
}

/// Departement without its communes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = Departement)]
pub struct DepartementDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dakar")]
    pub name: String,
    #[schema(example = 1)]
    pub region_id: i64,
}

impl From<Departement> for DepartementDto {
    fn from(departement: Departement) -> Self {
        Self {
            id: departement.id,
            name: departement.name,
            region_id: departement.region_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = Commune)]
pub struct CommuneDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dakar-Plateau")]
    pub name: String,
    #[schema(example = 1)]
    pub departement_id: i64,
    #[schema(example = 14.6708)]
    pub lat: f64,
    #[schema(example = -17.4381)]
    pub lon: f64,
    /// Metres, null when unknown
    pub elevation: Option<i32>,
}

impl From<Commune> for CommuneDto {
    fn from(commune: Commune) -> Self {
        Self {
            id: commune.id,
            name: commune.name,
            departement_id: commune.departement_id,
            lat: commune.lat,
            lon: commune.lon,
            elevation: commune.elevation,
        }
    }
}

// ============================================================================
// Nested shapes
// ============================================================================

/// Region with its departements (communes are never included here)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = RegionWithDepartements)]
pub struct RegionWithDepartementsDto {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub departements: Vec<DepartementDto>,
}

impl RegionWithDepartementsDto {
    pub fn new(region: Region, departements: Vec<DepartementDto>) -> Self {
        Self {
            id: region.id,
            name: region.name,
            code: region.code,
            departements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = DepartementWithCommunes)]
pub struct DepartementWithCommunesDto {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub communes: Vec<CommuneDto>,
}

impl DepartementWithCommunesDto {
    pub fn new(departement: Departement, communes: Vec<CommuneDto>) -> Self {
        Self {
            id: departement.id,
            name: departement.name,
            region_id: departement.region_id,
            communes,
        }
    }
}

/// Departement with its parent region, used inside [`CommuneWithHierarchyDto`]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = DepartementWithRegion)]
pub struct DepartementWithRegionDto {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub region: RegionDto,
}

impl DepartementWithRegionDto {
    pub fn new(departement: Departement, region: Region) -> Self {
        Self {
            id: departement.id,
            name: departement.name,
            region_id: departement.region_id,
            region: region.into(),
        }
    }
}

/// Commune with its departement and region (breadcrumb)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = CommuneWithHierarchy)]
pub struct CommuneWithHierarchyDto {
    pub id: i64,
    pub name: String,
    pub departement_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<i32>,
    pub departement: DepartementWithRegionDto,
}

impl CommuneWithHierarchyDto {
    pub fn new(commune: Commune, departement: DepartementWithRegionDto) -> Self {
        Self {
            id: commune.id,
            name: commune.name,
            departement_id: commune.departement_id,
            lat: commune.lat,
            lon: commune.lon,
            elevation: commune.elevation,
            departement,
        }
    }
}

/// Region with departements and their communes, the search result shape
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = RegionTree)]
pub struct RegionTreeDto {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub departements: Vec<DepartementWithCommunesDto>,
}

impl RegionTreeDto {
    pub fn new(region: Region, departements: Vec<DepartementWithCommunesDto>) -> Self {
        Self {
            id: region.id,
            name: region.name,
            code: region.code,
            departements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = RegionSummary)]
pub struct RegionSummaryDto {
    pub id: i64,
    pub name: String,
}

/// A departement looked up through its region
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = RegionDepartementDetail)]
pub struct RegionDepartementDetailDto {
    pub region: RegionSummaryDto,
    pub departement: DepartementWithCommunesDto,
}
