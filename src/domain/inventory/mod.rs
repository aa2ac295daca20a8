pub mod model;
pub mod repository;

pub use model::{minute_timestamp, InventoryItem, LAST_UPDATED_FORMAT};
pub use repository::InventoryRepository;
