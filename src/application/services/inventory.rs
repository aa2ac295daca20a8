//! Inventory service — stock records and low-stock derivation

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    minute_timestamp, DomainError, DomainResult, InventoryItem, RepositoryProvider,
};

/// Input for a save. Add and edit are the same operation: the record is
/// upserted by item name.
#[derive(Debug, Clone)]
pub struct SaveItem {
    pub item: String,
    pub category: String,
    pub stock: i32,
    pub reorder_level: i32,
}

/// Aggregate counts for the stock-analysis view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSummary {
    pub total_items: u64,
    pub low_stock_items: u64,
}

pub struct InventoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl InventoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Upsert a stock record, stamping `last_updated` with the current
    /// minute. Quantities must be non-negative. Returns the stored row.
    pub async fn save_item(&self, input: SaveItem) -> DomainResult<InventoryItem> {
        if input.stock < 0 {
            return Err(DomainError::Validation("stock must be non-negative".into()));
        }
        if input.reorder_level < 0 {
            return Err(DomainError::Validation(
                "reorder level must be non-negative".into(),
            ));
        }

        let record = InventoryItem {
            item: input.item,
            category: input.category,
            stock: input.stock,
            reorder_level: input.reorder_level,
            last_updated: minute_timestamp(),
        };

        self.repos.inventory().upsert(record.clone()).await?;
        info!(item = %record.item, stock = record.stock, "Item saved");
        Ok(record)
    }

    pub async fn list_items(&self) -> DomainResult<Vec<InventoryItem>> {
        self.repos.inventory().list().await
    }

    /// Low-stock subset: a pure filter over `list_items`, inclusive of
    /// `stock == reorder_level`.
    pub async fn low_stock_items(&self) -> DomainResult<Vec<InventoryItem>> {
        let mut items = self.list_items().await?;
        items.retain(|i| i.is_low_stock());
        Ok(items)
    }

    pub async fn summary(&self) -> DomainResult<StockSummary> {
        let items = self.list_items().await?;
        let low_stock_items = items.iter().filter(|i| i.is_low_stock()).count() as u64;

        Ok(StockSummary {
            total_items: items.len() as u64,
            low_stock_items,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::test_db;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn service() -> InventoryService {
        InventoryService::new(Arc::new(SeaOrmRepositoryProvider::new(test_db().await)))
    }

    fn input(item: &str, stock: i32, reorder_level: i32) -> SaveItem {
        SaveItem {
            item: item.into(),
            category: "Hardware".into(),
            stock,
            reorder_level,
        }
    }

    #[tokio::test]
    async fn save_rejects_negative_quantities() {
        let svc = service().await;

        let err = svc.save_item(input("Widget", -1, 10)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = svc.save_item(input("Widget", 1, -10)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert!(svc.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saving_twice_overwrites_the_single_row() {
        let svc = service().await;

        svc.save_item(input("Widget", 5, 10)).await.unwrap();
        let stored = svc.save_item(input("Widget", 20, 3)).await.unwrap();

        let items = svc.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], stored);
        assert_eq!(items[0].stock, 20);
        assert_eq!(items[0].reorder_level, 3);
    }

    #[tokio::test]
    async fn low_stock_filter_is_inclusive_of_the_threshold() {
        let svc = service().await;

        svc.save_item(input("Low", 5, 10)).await.unwrap();
        svc.save_item(input("AtThreshold", 10, 10)).await.unwrap();
        svc.save_item(input("Healthy", 11, 10)).await.unwrap();

        let low: Vec<String> = svc
            .low_stock_items()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.item)
            .collect();
        assert!(low.contains(&"Low".to_string()));
        assert!(low.contains(&"AtThreshold".to_string()));
        assert!(!low.contains(&"Healthy".to_string()));
    }

    #[tokio::test]
    async fn summary_counts_total_and_low_stock() {
        let svc = service().await;

        svc.save_item(input("A", 0, 0)).await.unwrap();
        svc.save_item(input("B", 3, 10)).await.unwrap();
        svc.save_item(input("C", 100, 10)).await.unwrap();

        let summary = svc.summary().await.unwrap();
        assert_eq!(
            summary,
            StockSummary {
                total_items: 3,
                low_stock_items: 2,
            }
        );
    }
}
