//! Forecast module — the naive projection series

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
