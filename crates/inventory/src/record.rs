use std::borrow::Cow;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use silomap_core::{Entity, LocationCode};

use crate::quantity::Quantity;

/// One normalized row of pasted inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    location_code: LocationCode,
    item_name: String,
    quantity: Quantity,
}

impl InventoryRecord {
    pub fn new(location_code: LocationCode, item_name: &str, quantity: Quantity) -> Self {
        Self {
            location_code,
            item_name: item_name.trim().to_string(),
            quantity,
        }
    }

    /// Build a record from the three raw cells of a pasted row.
    pub fn from_cells(location_code: &str, item_name: &str, quantity: &str) -> Self {
        Self::new(
            LocationCode::normalize(location_code),
            item_name,
            Quantity::normalize(quantity),
        )
    }

    pub fn location_code(&self) -> &LocationCode {
        &self.location_code
    }

    /// Trimmed item name; empty means no item assigned.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn quantity_display(&self) -> Cow<'_, str> {
        self.quantity.display()
    }

    pub fn quantity_numeric(&self) -> u64 {
        self.quantity.numeric()
    }

    /// Flatten into the triple used by aggregation consumers.
    pub fn to_entry(&self) -> InventoryEntry {
        InventoryEntry {
            location_code: self.location_code.clone(),
            item_name: self.item_name.clone(),
            quantity_numeric: self.quantity_numeric(),
        }
    }
}

impl Entity for InventoryRecord {
    type Id = LocationCode;

    fn id(&self) -> &Self::Id {
        &self.location_code
    }
}

impl Serialize for InventoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InventoryRecord", 4)?;
        state.serialize_field("location_code", &self.location_code)?;
        state.serialize_field("item_name", &self.item_name)?;
        state.serialize_field("quantity_display", &self.quantity.display())?;
        state.serialize_field("quantity_numeric", &self.quantity.numeric())?;
        state.end()
    }
}

/// `{location_code, item_name, quantity_numeric}` triple for totals and charts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InventoryEntry {
    pub location_code: LocationCode,
    pub item_name: String,
    pub quantity_numeric: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_normalizes_every_field() {
        let record = InventoryRecord::from_cells("  a101 ", " WASW ", "1,508");
        assert_eq!(record.location_code().as_str(), "A101");
        assert_eq!(record.item_name(), "WASW");
        assert_eq!(record.quantity_display(), "1,508");
        assert_eq!(record.quantity_numeric(), 1508);
    }

    #[test]
    fn empty_item_name_is_valid() {
        let record = InventoryRecord::from_cells("A203", "   ", "-");
        assert_eq!(record.item_name(), "");
        assert_eq!(record.quantity_display(), "-");
        assert_eq!(record.quantity_numeric(), 0);
    }

    #[test]
    fn identity_is_the_location_code() {
        let a = InventoryRecord::from_cells("a101", "WASW", "1");
        let b = InventoryRecord::from_cells("A101", "WCRS", "2");
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_display_and_numeric_forms() {
        let record = InventoryRecord::from_cells("A102", "WCRS", "1671.9");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location_code": "A102",
                "item_name": "WCRS",
                "quantity_display": "1,671",
                "quantity_numeric": 1671,
            })
        );
    }

    #[test]
    fn entry_carries_numeric_quantity_only() {
        let entry = InventoryRecord::from_cells("A105", "WUSH", "N/A").to_entry();
        assert_eq!(entry.location_code.as_str(), "A105");
        assert_eq!(entry.item_name, "WUSH");
        assert_eq!(entry.quantity_numeric, 0);
    }
}
