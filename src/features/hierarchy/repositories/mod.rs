mod memory_store;
mod pg_store;
mod seeder;
mod store;

pub use memory_store::InMemoryHierarchyStore;
pub use pg_store::PgHierarchyStore;
pub use seeder::seed_database;
pub use store::{HierarchyStore, Selection};
