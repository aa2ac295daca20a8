//! Stock analysis module — summary metrics and low-stock alerts

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
