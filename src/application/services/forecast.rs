//! Naive stock forecast
//!
//! The projection is a fixed additive offset over current stock: the
//! exact series the legacy dashboard charts, not a statistical model.
//! Substituting a real forecaster would change observable behavior.

use std::sync::Arc;

use crate::domain::{DomainResult, InventoryItem, RepositoryProvider};

/// Fixed projection offset applied to every item.
pub const FORECAST_OFFSET: i32 = 10;

/// Projected stock for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockProjection {
    pub item: String,
    pub current_stock: i32,
    pub projected_stock: i32,
}

/// Project every item's stock by the fixed offset.
pub fn project(items: &[InventoryItem]) -> Vec<StockProjection> {
    items
        .iter()
        .map(|i| StockProjection {
            item: i.item.clone(),
            current_stock: i.stock,
            projected_stock: i.stock + FORECAST_OFFSET,
        })
        .collect()
}

pub struct ForecastService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ForecastService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Projection series over the whole inventory.
    pub async fn forecast(&self) -> DomainResult<Vec<StockProjection>> {
        let items = self.repos.inventory().list().await?;
        Ok(project(&items))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::minute_timestamp;

    fn item(name: &str, stock: i32) -> InventoryItem {
        InventoryItem {
            item: name.into(),
            category: "Hardware".into(),
            stock,
            reorder_level: 5,
            last_updated: minute_timestamp(),
        }
    }

    #[test]
    fn projection_adds_the_fixed_offset() {
        let projections = project(&[item("Widget", 5), item("Bolt", 900)]);
        assert_eq!(
            projections,
            vec![
                StockProjection {
                    item: "Widget".into(),
                    current_stock: 5,
                    projected_stock: 15,
                },
                StockProjection {
                    item: "Bolt".into(),
                    current_stock: 900,
                    projected_stock: 910,
                },
            ]
        );
    }

    #[test]
    fn zero_stock_projects_to_the_offset() {
        let projections = project(&[item("Empty", 0)]);
        assert_eq!(projections[0].projected_stock, FORECAST_OFFSET);
    }

    #[test]
    fn empty_inventory_projects_to_nothing() {
        assert!(project(&[]).is_empty());
    }
}
