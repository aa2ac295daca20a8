use super::inventory::InventoryRepository;
use super::user::UserRepository;

/// Unified accessor for all repositories. Services depend on this trait
/// rather than on concrete storage.
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;

    fn inventory(&self) -> &dyn InventoryRepository;
}
