use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stock record, keyed by SKU.
///
/// Quantities are unsigned on purpose: a negative on-hand count is not a
/// state the store can represent, so it cannot be written either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub sku: String,
    pub available_qty: u64,
    pub reserved_qty: u64,
    pub location: String,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a stock record. Absent fields are left untouched;
/// an explicit JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StockPatch {
    pub available_qty: Option<u64>,
    pub reserved_qty: Option<u64>,
    pub location: Option<String>,
}

impl StockItem {
    /// Apply a partial update, overwriting only the supplied fields.
    ///
    /// `updated_at` is bumped unconditionally, empty patch included: the
    /// record was still the target of a write.
    pub fn merge(&mut self, patch: StockPatch, now: DateTime<Utc>) {
        if let Some(available_qty) = patch.available_qty {
            self.available_qty = available_qty;
        }
        if let Some(reserved_qty) = patch.reserved_qty {
            self.reserved_qty = reserved_qty;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        self.updated_at = now;
    }
}
