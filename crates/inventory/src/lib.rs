//! Inventory domain module.
//!
//! Turns pasted spreadsheet text into a typed inventory table, plus the
//! aggregation and floor-plan views built on top of it. Purely
//! deterministic domain logic (no IO, no rendering).

pub mod floor_plan;
pub mod parser;
pub mod quantity;
pub mod record;
pub mod summary;
pub mod table;

pub use floor_plan::{FloorPlan, PlanRow, SiloKind, Slot, SlotStatus};
pub use parser::{InventoryTableParser, parse_inventory};
pub use quantity::{Quantity, group_thousands};
pub use record::{InventoryEntry, InventoryRecord};
pub use summary::InventorySummary;
pub use table::InventoryTable;
