//! Name search across the three hierarchy levels.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/search?q=&type=` | Case-insensitive substring search |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SearchService;
