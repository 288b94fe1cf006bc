mod commune;
mod departement;
mod entity_kind;
mod region;

pub use commune::Commune;
pub use departement::Departement;
pub use entity_kind::EntityKind;
pub use region::Region;
