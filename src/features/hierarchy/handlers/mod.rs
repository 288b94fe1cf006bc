mod commune_handler;
mod departement_handler;
mod region_handler;

pub use commune_handler::*;
pub use departement_handler::*;
pub use region_handler::*;
