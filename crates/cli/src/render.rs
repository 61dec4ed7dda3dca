//! Output rendering for parsed inventory.

use std::fmt::Write as _;

use serde::Serialize;

use silomap_core::LocationCode;
use silomap_inventory::{FloorPlan, InventorySummary, InventoryTable, SiloKind, Slot, SlotStatus};

/// Everything the JSON output carries.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub records: &'a InventoryTable,
    pub board: Vec<Slot<'a>>,
    pub unplaced: Vec<&'a LocationCode>,
    pub summary: InventorySummary,
}

impl<'a> Report<'a> {
    pub fn new(table: &'a InventoryTable, plan: &FloorPlan) -> Self {
        Self {
            records: table,
            board: plan.board(table),
            unplaced: plan.unplaced(table),
            summary: table.summary(),
        }
    }
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Which optional sections the text output includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSections {
    pub board: bool,
    pub summary: bool,
}

pub fn render_text(report: &Report<'_>, plan: &FloorPlan, sections: TextSections) -> String {
    let mut out = String::new();

    if report.records.is_empty() {
        out.push_str("no inventory rows entered\n");
    } else {
        let _ = writeln!(out, "{:<10} {:<16} {:>14}", "LOCATION", "ITEM", "QUANTITY");
        for record in report.records.records() {
            let _ = writeln!(
                out,
                "{:<10} {:<16} {:>14}",
                record.location_code(),
                record.item_name(),
                record.quantity_display()
            );
        }
    }

    if sections.board {
        out.push('\n');
        write_board(&mut out, report, plan);
    }

    if sections.summary {
        out.push('\n');
        write_summary(&mut out, &report.summary);
    }

    out
}

fn write_board(out: &mut String, report: &Report<'_>, plan: &FloorPlan) {
    let mut slots = report.board.iter();
    for (idx, row) in plan.rows().iter().enumerate() {
        let kind = match row.kind {
            SiloKind::Round => "silo",
            SiloKind::Bay => "bay",
        };
        let cells: Vec<String> = slots.by_ref().take(row.codes.len()).map(slot_cell).collect();
        let _ = writeln!(out, "row {} ({kind}): {}", idx + 1, cells.join(" | "));
    }

    if !report.unplaced.is_empty() {
        let codes: Vec<&str> = report.unplaced.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(out, "not on floor plan: {}", codes.join(", "));
    }
}

fn slot_cell(slot: &Slot<'_>) -> String {
    match slot.status {
        SlotStatus::Empty => format!("{} (empty)", slot.code),
        SlotStatus::ZeroStock(r) => format!("{} {} 0 !", slot.code, r.item_name()),
        SlotStatus::Stocked(r) => format!("{} {} {}", slot.code, r.item_name(), r.quantity_display()),
    }
}

fn write_summary(out: &mut String, summary: &InventorySummary) {
    let _ = writeln!(out, "locations: {}", summary.item_count);
    let _ = writeln!(
        out,
        "total quantity: {}",
        silomap_inventory::group_thousands(summary.total_quantity)
    );
    let _ = writeln!(out, "zero stock: {}", summary.zero_count);
    match &summary.max_entry {
        Some(max) => {
            let _ = writeln!(
                out,
                "largest: {} {} ({})",
                max.location_code,
                max.item_name,
                silomap_inventory::group_thousands(max.quantity_numeric)
            );
        }
        None => out.push_str("largest: -\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silomap_inventory::parse_inventory;

    #[test]
    fn text_lists_records_in_pasted_order() {
        let table = parse_inventory("A102\tWCRS\t1671\nA101\tWASW\t1508").unwrap();
        let plan = FloorPlan::standard();
        let text = render_text(&Report::new(&table, &plan), &plan, TextSections::default());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("LOCATION"));
        assert!(lines[1].starts_with("A102"));
        assert!(lines[1].ends_with("1,671"));
        assert!(lines[2].starts_with("A101"));
    }

    #[test]
    fn empty_table_says_so() {
        let table = InventoryTable::new();
        let plan = FloorPlan::standard();
        let text = render_text(&Report::new(&table, &plan), &plan, TextSections::default());
        assert_eq!(text, "no inventory rows entered\n");
    }

    #[test]
    fn board_and_summary_sections() {
        let table = parse_inventory("A101\tWASW\t1508\nA201\tWCRS\t0\nA999\tX\t5").unwrap();
        let plan = FloorPlan::standard();
        let sections = TextSections {
            board: true,
            summary: true,
        };
        let text = render_text(&Report::new(&table, &plan), &plan, sections);

        assert!(text.contains("row 1 (silo): A101 WASW 1,508 | A102 (empty)"));
        assert!(text.contains("row 2 (bay): A201 WCRS 0 !"));
        assert!(text.contains("not on floor plan: A999"));
        assert!(text.contains("total quantity: 1,513"));
        assert!(text.contains("zero stock: 1"));
        assert!(text.contains("largest: A101 WASW (1,508)"));
    }

    #[test]
    fn json_carries_all_parts() {
        let table = parse_inventory("A101\tWASW\t1508\nA999\tX\t0").unwrap();
        let plan = FloorPlan::standard();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&Report::new(&table, &plan)).unwrap()).unwrap();

        assert_eq!(json["records"].as_array().unwrap().len(), 2);
        assert_eq!(json["board"].as_array().unwrap().len(), 32);
        assert_eq!(json["board"][0]["status"], "stocked");
        assert_eq!(json["unplaced"][0], "A999");
        assert_eq!(json["summary"]["total_quantity"], 1508);
        assert_eq!(json["summary"]["zero_count"], 1);
    }
}
