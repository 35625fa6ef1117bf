//! Stock records: on-hand inventory keyed by SKU.
//!
//! Pure data shapes and merge rules, no IO and no storage assumptions.

pub mod stock;

pub use stock::{StockItem, StockPatch};
