//! Business logic, use cases and services

pub mod services;
pub mod session;

pub use services::{
    project, AuthResult, ForecastService, InventoryService, SaveItem, StockProjection,
    StockSummary, UserService, FORECAST_OFFSET,
};
pub use session::{SessionRegistry, SharedSessionRegistry};
