//! Core business entities, types and traits

pub mod error;
pub mod inventory;
pub mod repositories;
pub mod session;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use inventory::{minute_timestamp, InventoryItem, InventoryRepository, LAST_UPDATED_FORMAT};
pub use repositories::RepositoryProvider;
pub use session::{SessionContext, View};
pub use user::{CreateUserDto, User, UserRepository, UserRole};
