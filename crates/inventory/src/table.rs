use std::collections::HashMap;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use silomap_core::{Entity, LocationCode};

use crate::record::{InventoryEntry, InventoryRecord};
use crate::summary::InventorySummary;

/// Inventory keyed by normalized location code.
///
/// Built fresh from each parse. Duplicate codes are last-write-wins; the
/// order in which each code first appeared is kept so iteration follows the
/// pasted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryTable {
    records: HashMap<LocationCode, InventoryRecord>,
    order: Vec<LocationCode>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record at its location code.
    ///
    /// Returns the replaced record, if any.
    pub(crate) fn upsert(&mut self, record: InventoryRecord) -> Option<InventoryRecord> {
        let code = record.id().clone();
        let previous = self.records.insert(code.clone(), record);
        if previous.is_none() {
            self.order.push(code);
        }
        previous
    }

    /// Point lookup; `code` is normalized first, so `" a101"` finds `A101`.
    ///
    /// `None` means the slot is empty, not that anything failed.
    pub fn get(&self, code: &str) -> Option<&InventoryRecord> {
        self.records.get(&LocationCode::normalize(code))
    }

    pub fn get_code(&self, code: &LocationCode) -> Option<&InventoryRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Location codes in first-appearance order.
    pub fn codes(&self) -> impl Iterator<Item = &LocationCode> {
        self.order.iter()
    }

    /// Records in first-appearance order of their code.
    pub fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.order.iter().filter_map(|code| self.records.get(code))
    }

    /// Flattened `{location_code, item_name, quantity_numeric}` view.
    pub fn entries(&self) -> Vec<InventoryEntry> {
        self.records().map(InventoryRecord::to_entry).collect()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_table(self)
    }
}

impl FromIterator<InventoryRecord> for InventoryTable {
    fn from_iter<I: IntoIterator<Item = InventoryRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.upsert(record);
        }
        table
    }
}

/// Serialized as the ordered list of records.
impl Serialize for InventoryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
