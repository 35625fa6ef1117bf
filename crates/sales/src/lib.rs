//! Sales order records: customer orders tracked by id.

pub mod order;

pub use order::{SalesOrder, SalesOrderPatch};
