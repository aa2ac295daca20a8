//! Inventory module — item upsert and listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
