//! Unversioned service routes: `/` and `/health`.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use handlers::SystemState;
