//! Session module — active view navigation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
