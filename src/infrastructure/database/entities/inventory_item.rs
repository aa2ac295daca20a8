//! Inventory entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory model — column layout matches the legacy dashboard store:
/// `inventory(item TEXT PRIMARY KEY, category TEXT, stock INTEGER,
/// reorder_level INTEGER, last_updated TEXT)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    /// The item name itself is the identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub item: String,

    /// Free-text category
    pub category: String,

    /// Current on-hand quantity (non-negative)
    pub stock: i32,

    /// Threshold at or below which the item is low stock
    pub reorder_level: i32,

    /// Local time, `YYYY-MM-DD HH:MM`, stamped on every save
    pub last_updated: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
