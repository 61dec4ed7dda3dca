//! KPI summary over a parsed table.

use serde::Serialize;

use crate::record::InventoryEntry;
use crate::table::InventoryTable;

/// Aggregates shown next to the floor plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_quantity: u64,
    /// Records with a counted quantity of exactly zero.
    pub zero_count: usize,
    /// Highest quantity; earliest record wins ties.
    pub max_entry: Option<InventoryEntry>,
}

impl InventorySummary {
    pub fn from_table(table: &InventoryTable) -> Self {
        let mut summary = Self::default();

        for record in table.records() {
            let quantity = record.quantity_numeric();
            summary.item_count += 1;
            summary.total_quantity = summary.total_quantity.saturating_add(quantity);

            if record.quantity().is_zero_stock() {
                summary.zero_count += 1;
            }

            let is_new_max = summary
                .max_entry
                .as_ref()
                .is_none_or(|best| quantity > best.quantity_numeric);
            if is_new_max {
                summary.max_entry = Some(record.to_entry());
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::InventoryRecord;

    fn table(rows: &[(&str, &str, &str)]) -> InventoryTable {
        rows.iter()
            .map(|(code, name, qty)| InventoryRecord::from_cells(code, name, qty))
            .collect()
    }

    #[test]
    fn sums_counts_and_finds_max() {
        let summary = table(&[
            ("A101", "WASW", "1,508"),
            ("A102", "WCRS", "1671"),
            ("A103", "WUSH", "0"),
            ("A104", "-", "-"),
        ])
        .summary();

        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total_quantity, 3179);
        assert_eq!(summary.zero_count, 1);
        let max = summary.max_entry.unwrap();
        assert_eq!(max.location_code.as_str(), "A102");
        assert_eq!(max.quantity_numeric, 1671);
    }

    #[test]
    fn earliest_record_wins_ties() {
        let summary = table(&[("A201", "X", "5"), ("A202", "Y", "5")]).summary();
        assert_eq!(summary.max_entry.unwrap().location_code.as_str(), "A201");
    }

    #[test]
    fn placeholder_quantity_is_not_a_stock_out() {
        let summary = table(&[("A301", "WASW", "-"), ("A302", "WASW", "")]).summary();
        assert_eq!(summary.zero_count, 0);
        assert_eq!(summary.total_quantity, 0);
    }

    #[test]
    fn empty_table_has_no_max() {
        let summary = InventoryTable::new().summary();
        assert_eq!(summary, InventorySummary::default());
        assert!(summary.max_entry.is_none());
    }

    #[test]
    fn total_saturates() {
        let max = u64::MAX.to_string();
        let summary = table(&[("A101", "X", max.as_str()), ("A102", "Y", "10")]).summary();
        assert_eq!(summary.total_quantity, u64::MAX);
    }
}
