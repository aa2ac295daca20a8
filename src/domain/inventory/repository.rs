use async_trait::async_trait;

use super::InventoryItem;
use crate::domain::DomainResult;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Insert-or-overwrite keyed on item name. An existing row has all
    /// mutable columns replaced in a single statement.
    async fn upsert(&self, item: InventoryItem) -> DomainResult<()>;

    async fn find_by_name(&self, item: &str) -> DomainResult<Option<InventoryItem>>;

    /// All rows in storage natural order; callers must not rely on a
    /// particular ordering.
    async fn list(&self) -> DomainResult<Vec<InventoryItem>>;
}
