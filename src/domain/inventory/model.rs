//! Inventory domain model

use chrono::Local;

/// `last_updated` stamp format: local time, minute precision, no zone.
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local time formatted for the `last_updated` column.
pub fn minute_timestamp() -> String {
    Local::now().format(LAST_UPDATED_FORMAT).to_string()
}

/// One tracked stock line. `item` is the primary key; saving an existing
/// name overwrites the whole row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub item: String,
    pub category: String,
    pub stock: i32,
    pub reorder_level: i32,
    pub last_updated: String,
}

impl InventoryItem {
    /// Low-stock rule: at or below the reorder threshold (inclusive).
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn item(stock: i32, reorder_level: i32) -> InventoryItem {
        InventoryItem {
            item: "Widget".into(),
            category: "Hardware".into(),
            stock,
            reorder_level,
            last_updated: minute_timestamp(),
        }
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        assert!(item(5, 10).is_low_stock());
        assert!(item(10, 10).is_low_stock());
        assert!(!item(11, 10).is_low_stock());
        assert!(item(0, 0).is_low_stock());
    }

    #[test]
    fn timestamp_has_minute_precision() {
        let ts = minute_timestamp();
        // "2024-01-01 09:30": 16 chars, no seconds
        assert_eq!(ts.len(), 16);
        assert!(NaiveDateTime::parse_from_str(&ts, LAST_UPDATED_FORMAT).is_ok());
    }
}
