//! Inventory DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::InventoryItem;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveItemRequest {
    /// Item name, which is the identifier. The legacy store accepts any
    /// string, including the empty one.
    pub item: String,
    #[serde(default)]
    pub category: String,
    #[validate(range(min = 0, message = "stock must be non-negative"))]
    pub stock: i32,
    #[validate(range(min = 0, message = "reorder level must be non-negative"))]
    pub reorder_level: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryItemDto {
    pub item: String,
    pub category: String,
    pub stock: i32,
    pub reorder_level: i32,
    pub last_updated: String,
}

impl From<InventoryItem> for InventoryItemDto {
    fn from(item: InventoryItem) -> Self {
        Self {
            item: item.item,
            category: item.category,
            stock: item.stock,
            reorder_level: item.reorder_level,
            last_updated: item.last_updated,
        }
    }
}
