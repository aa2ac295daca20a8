//! Forecast DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::StockProjection;

#[derive(Debug, Serialize, ToSchema)]
pub struct StockProjectionDto {
    pub item: String,
    pub current_stock: i32,
    pub projected_stock: i32,
}

impl From<StockProjection> for StockProjectionDto {
    fn from(projection: StockProjection) -> Self {
        Self {
            item: projection.item,
            current_stock: projection.current_stock,
            projected_stock: projection.projected_stock,
        }
    }
}
