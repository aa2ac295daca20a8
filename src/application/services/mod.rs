pub mod forecast;
pub mod identity;
pub mod inventory;

pub use forecast::{project, ForecastService, StockProjection, FORECAST_OFFSET};
pub use identity::{AuthResult, UserService};
pub use inventory::{InventoryService, SaveItem, StockSummary};
