use chrono::Utc;
use rust_decimal::Decimal;
use stockroom_inventory::StockItem;
use stockroom_sales::SalesOrder;

use crate::snapshot::Snapshot;

/// Demo data for fresh deployments and tests.
pub fn demo_snapshot() -> Snapshot {
    let now = Utc::now();
    Snapshot {
        stock: vec![
            StockItem {
                sku: "SKU123".to_string(),
                available_qty: 100,
                reserved_qty: 20,
                location: "A1".to_string(),
                updated_at: now,
            },
            StockItem {
                sku: "SKU456".to_string(),
                available_qty: 50,
                reserved_qty: 10,
                location: "B2".to_string(),
                updated_at: now,
            },
            StockItem {
                sku: "SKU789".to_string(),
                available_qty: 200,
                reserved_qty: 0,
                location: "C3".to_string(),
                updated_at: now,
            },
        ],
        orders: vec![
            SalesOrder {
                id: "ORD1001".to_string(),
                status: "Processing".to_string(),
                eta: "2025-09-01".to_string(),
                total_amount: Decimal::new(125_000, 2),
                updated_at: now,
            },
            SalesOrder {
                id: "ORD1002".to_string(),
                status: "Shipped".to_string(),
                eta: "2025-08-25".to_string(),
                total_amount: Decimal::new(49_950, 2),
                updated_at: now,
            },
        ],
        purchase_orders: Vec::new(),
    }
}
