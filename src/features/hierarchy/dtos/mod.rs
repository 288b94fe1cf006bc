mod hierarchy_dto;

pub use hierarchy_dto::*;
