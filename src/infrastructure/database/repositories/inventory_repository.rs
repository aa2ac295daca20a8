use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::domain::{DomainResult, InventoryItem, InventoryRepository};
use crate::infrastructure::database::entities::inventory_item;

use super::db_err;

pub struct SeaOrmInventoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: inventory_item::Model) -> InventoryItem {
    InventoryItem {
        item: model.item,
        category: model.category,
        stock: model.stock,
        reorder_level: model.reorder_level,
        last_updated: model.last_updated,
    }
}

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn upsert(&self, item: InventoryItem) -> DomainResult<()> {
        let row = inventory_item::ActiveModel {
            item: Set(item.item),
            category: Set(item.category),
            stock: Set(item.stock),
            reorder_level: Set(item.reorder_level),
            last_updated: Set(item.last_updated),
        };

        // Single-statement INSERT ... ON CONFLICT(item) DO UPDATE: add and
        // edit are the same operation, atomic per item.
        inventory_item::Entity::insert(row)
            .on_conflict(
                OnConflict::column(inventory_item::Column::Item)
                    .update_columns([
                        inventory_item::Column::Category,
                        inventory_item::Column::Stock,
                        inventory_item::Column::ReorderLevel,
                        inventory_item::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_name(&self, item: &str) -> DomainResult<Option<InventoryItem>> {
        let model = inventory_item::Entity::find_by_id(item)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        let models = inventory_item::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::test_db;

    fn record(item: &str, category: &str, stock: i32, reorder_level: i32) -> InventoryItem {
        InventoryItem {
            item: item.into(),
            category: category.into(),
            stock,
            reorder_level,
            last_updated: "2024-01-01 09:30".into(),
        }
    }

    #[tokio::test]
    async fn upsert_inserts_then_overwrites_in_place() {
        let repo = SeaOrmInventoryRepository::new(test_db().await);

        repo.upsert(record("Widget", "Hardware", 5, 10)).await.unwrap();

        let mut second = record("Widget", "Tools", 42, 7);
        second.last_updated = "2024-02-02 10:15".into();
        repo.upsert(second.clone()).await.unwrap();

        // Exactly one row, carrying the second call's values.
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], second);
    }

    #[tokio::test]
    async fn find_by_name_distinguishes_items() {
        let repo = SeaOrmInventoryRepository::new(test_db().await);

        repo.upsert(record("Widget", "Hardware", 5, 10)).await.unwrap();
        repo.upsert(record("Bolt", "Hardware", 900, 50)).await.unwrap();

        let widget = repo.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(widget.stock, 5);
        assert!(repo.find_by_name("Nut").await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_item_name_is_a_valid_key() {
        // Degenerate but allowed: the legacy dashboard never rejected it.
        let repo = SeaOrmInventoryRepository::new(test_db().await);

        repo.upsert(record("", "Misc", 1, 1)).await.unwrap();
        repo.upsert(record("", "Misc", 2, 1)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].stock, 2);
    }
}
