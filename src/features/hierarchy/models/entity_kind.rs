use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three levels of the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Region,
    Departement,
    Commune,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Region,
        EntityKind::Departement,
        EntityKind::Commune,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Region => "region",
            EntityKind::Departement => "departement",
            EntityKind::Commune => "commune",
        }
    }

    /// Backing table name
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Region => "regions",
            EntityKind::Departement => "departements",
            EntityKind::Commune => "communes",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown entity kind '{}'", s))
    }
}
