use serde::{Deserialize, Serialize};
use stockroom_inventory::StockItem;
use stockroom_purchasing::PurchaseOrder;
use stockroom_sales::SalesOrder;

/// The complete persisted state of the store, as one JSON document.
///
/// Every collection defaults to empty so a snapshot decodes from a partial
/// document (or `{}`) without complaint. The field order here is the order
/// the document is written in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub stock: Vec<StockItem>,
    #[serde(default)]
    pub orders: Vec<SalesOrder>,
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty() && self.orders.is_empty() && self.purchase_orders.is_empty()
    }
}
