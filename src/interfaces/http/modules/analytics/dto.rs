//! Stock analysis DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::StockSummary;

/// Dashboard summary metrics: total item count and how many of those are
/// at or below their reorder level.
#[derive(Debug, Serialize, ToSchema)]
pub struct StockSummaryDto {
    pub total_items: u64,
    pub low_stock_items: u64,
}

impl From<StockSummary> for StockSummaryDto {
    fn from(summary: StockSummary) -> Self {
        Self {
            total_items: summary.total_items,
            low_stock_items: summary.low_stock_items,
        }
    }
}
