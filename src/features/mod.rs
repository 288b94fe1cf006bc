pub mod hierarchy;
pub mod search;
pub mod stats;
pub mod system;
