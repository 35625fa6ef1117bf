//! Purchase order records: replenishment orders with store-generated ids.

pub mod id;
pub mod order;

pub use id::{allocate_id, candidate_id, MAX_ID_ATTEMPTS};
pub use order::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch};
