//! Pasted spreadsheet text -> [`InventoryTable`].
//!
//! Input is what a spreadsheet puts on the clipboard: one row per line,
//! cells separated by a tab, in the fixed order location code, item name,
//! quantity. Parsing is all-or-nothing: one malformed row rejects the whole
//! paste.
//!
//! Quotes carry no meaning: every line is split literally on tabs, so a
//! stray `"` stays in its cell and can never join lines together.

use core::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use silomap_core::{DomainError, DomainResult};

use crate::record::InventoryRecord;
use crate::table::InventoryTable;

/// Converts pasted tab-separated text into an [`InventoryTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryTableParser;

impl InventoryTableParser {
    /// Cells per row: location code, item name, quantity.
    pub const FIELD_COUNT: usize = 3;

    pub const DELIMITER: u8 = b'\t';

    pub fn new() -> Self {
        Self
    }

    /// Parse a whole paste.
    ///
    /// Empty or whitespace-only text is the "nothing entered yet" state and
    /// yields an empty table. Blank lines are skipped.
    pub fn parse(&self, raw_text: &str) -> DomainResult<InventoryTable> {
        if raw_text.trim().is_empty() {
            debug!("no inventory text entered");
            return Ok(InventoryTable::new());
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(Self::DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(raw_text.as_bytes());

        let mut table = InventoryTable::new();
        let mut rows = 0usize;
        let mut fallbacks = 0usize;

        for result in reader.records() {
            let row = result.map_err(|e| reject(DomainError::malformed(e.to_string())))?;
            if is_blank(&row) {
                continue;
            }

            if row.len() != Self::FIELD_COUNT {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                return Err(reject(DomainError::malformed(format!(
                    "line {line}: expected {} tab-separated fields (location, item, quantity), found {}",
                    Self::FIELD_COUNT,
                    row.len()
                ))));
            }

            let record = InventoryRecord::from_cells(&row[0], &row[1], &row[2]);
            if !record.quantity().is_counted() {
                fallbacks += 1;
            }
            rows += 1;
            table.upsert(record);
        }

        debug!(
            rows,
            locations = table.len(),
            quantity_fallbacks = fallbacks,
            "parsed inventory text"
        );
        Ok(table)
    }
}

/// Parse pasted inventory text with the default parser.
pub fn parse_inventory(raw_text: &str) -> DomainResult<InventoryTable> {
    InventoryTableParser::new().parse(raw_text)
}

impl FromStr for InventoryTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_inventory(s)
    }
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

fn reject(err: DomainError) -> DomainError {
    warn!(error = %err, "rejecting pasted inventory text");
    err
}
