//! The fixed silo layout and per-slot status lookup.
//!
//! Only the data side of the floor plan lives here: which codes exist, in
//! what order, and what each slot currently holds. Coordinates and styling
//! belong to whoever draws it.

use serde::Serialize;

use silomap_core::LocationCode;

use crate::record::InventoryRecord;
use crate::table::InventoryTable;

/// Physical kind of a slot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiloKind {
    /// Round silo (rows 1, 3, 5 of the standard plan).
    Round,
    /// Flat bay between silo rows (rows 2 and 4).
    Bay,
}

/// One row of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub kind: SiloKind,
    pub codes: Vec<LocationCode>,
}

/// What a slot holds after looking it up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "record", rename_all = "snake_case")]
pub enum SlotStatus<'a> {
    /// No row was pasted for this code.
    Empty,
    /// A row exists and its counted quantity is zero.
    ZeroStock(&'a InventoryRecord),
    Stocked(&'a InventoryRecord),
}

impl<'a> SlotStatus<'a> {
    pub fn record(&self) -> Option<&'a InventoryRecord> {
        match self {
            Self::Empty => None,
            Self::ZeroStock(r) | Self::Stocked(r) => Some(r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot<'a> {
    pub code: LocationCode,
    pub kind: SiloKind,
    #[serde(flatten)]
    pub status: SlotStatus<'a>,
}

impl Slot<'_> {
    /// Item name, or empty for an empty slot.
    pub fn item_name(&self) -> &str {
        self.status.record().map(InventoryRecord::item_name).unwrap_or_default()
    }

    /// Display quantity, or empty for an empty slot.
    pub fn quantity_display(&self) -> String {
        self.status
            .record()
            .map(|r| r.quantity_display().into_owned())
            .unwrap_or_default()
    }
}

/// Ordered rows of location codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    rows: Vec<PlanRow>,
}

impl FloorPlan {
    pub fn new(rows: Vec<PlanRow>) -> Self {
        Self { rows }
    }

    /// The warehouse layout: five rows of `A{row}{slot:02}` codes. Silo rows
    /// hold six slots, the bay rows between them seven.
    pub fn standard() -> Self {
        let rows = (1u8..=5)
            .map(|row| {
                let (kind, slots) = if row % 2 == 1 {
                    (SiloKind::Round, 6u8)
                } else {
                    (SiloKind::Bay, 7u8)
                };
                let codes = (1..=slots)
                    .map(|slot| LocationCode::normalize(&format!("A{row}{slot:02}")))
                    .collect();
                PlanRow { kind, codes }
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[PlanRow] {
        &self.rows
    }

    /// Every code in layout order.
    pub fn codes(&self) -> impl Iterator<Item = &LocationCode> {
        self.rows.iter().flat_map(|row| row.codes.iter())
    }

    pub fn contains(&self, code: &LocationCode) -> bool {
        self.codes().any(|c| c == code)
    }

    /// Look every layout slot up in `table`.
    pub fn board<'a>(&self, table: &'a InventoryTable) -> Vec<Slot<'a>> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.codes.iter().map(move |code| Slot {
                    code: code.clone(),
                    kind: row.kind,
                    status: match table.get_code(code) {
                        None => SlotStatus::Empty,
                        Some(r) if r.quantity().is_zero_stock() => SlotStatus::ZeroStock(r),
                        Some(r) => SlotStatus::Stocked(r),
                    },
                })
            })
            .collect()
    }

    /// Table codes with no slot in this plan, in table order.
    pub fn unplaced<'a>(&self, table: &'a InventoryTable) -> Vec<&'a LocationCode> {
        table.codes().filter(|code| !self.contains(code)).collect()
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::standard()
    }
}
