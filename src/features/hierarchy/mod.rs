//! Senegal administrative hierarchy (découpage administratif).
//!
//! Three levels, each row pointing at its parent:
//!
//! - Level 1: Régions - 14 rows
//! - Level 2: Départements - 46 rows
//! - Level 3: Communes
//!
//! Data is read through [`HierarchyStore`], backed either by Postgres or by
//! the bundled dataset held in memory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/regions` | List all regions |
//! | GET | `/api/v1/regions/{id}` | Region with its departements |
//! | GET | `/api/v1/regions/{regionId}/departements` | Departements of a region |
//! | GET | `/api/v1/regions/{regionId}/departements/{departementId}` | Departement of a region with its communes |
//! | GET | `/api/v1/departements` | List departements (`region_id` filter) |
//! | GET | `/api/v1/departements/{id}` | Departement with its communes |
//! | GET | `/api/v1/departements/{id}/communes` | Communes of a departement |
//! | GET | `/api/v1/communes` | List communes (`departement_id` filter, pagination) |
//! | GET | `/api/v1/communes/{id}` | Commune with departement and region |

pub mod dataset;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use dataset::Dataset;
pub use repositories::{HierarchyStore, InMemoryHierarchyStore, PgHierarchyStore};
pub use services::HierarchyService;
