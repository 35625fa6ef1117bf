use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use stockroom_core::{RecordError, RecordResult};
use stockroom_inventory::{StockItem, StockPatch};
use stockroom_purchasing::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch};
use stockroom_sales::{SalesOrder, SalesOrderPatch};

use crate::config::PurchasingDefaults;
use crate::persistence::SnapshotStore;
use crate::snapshot::Snapshot;

/// Record-level operations over the snapshot document.
///
/// Every read loads the snapshot fresh; every write runs under a single
/// process-wide lock as load, mutate, save. Nothing is cached between calls,
/// so the file on disk is the only source of truth.
pub struct RecordStore<S> {
    store: S,
    defaults: PurchasingDefaults,
    write_lock: Mutex<()>,
}

impl<S: SnapshotStore> RecordStore<S> {
    pub fn new(store: S, defaults: PurchasingDefaults) -> Self {
        Self {
            store,
            defaults,
            write_lock: Mutex::new(()),
        }
    }

    fn write_guard(&self) -> RecordResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| RecordError::persistence("write lock poisoned"))
    }

    pub fn stock_get(&self, sku: &str) -> RecordResult<StockItem> {
        let snapshot = self.store.load()?;
        snapshot
            .stock
            .into_iter()
            .find(|item| item.sku == sku)
            .ok_or_else(|| RecordError::not_found(format!("SKU {sku}")))
    }

    pub fn stock_list(&self) -> RecordResult<Vec<StockItem>> {
        Ok(self.store.load()?.stock)
    }

    pub fn stock_update(&self, sku: &str, patch: StockPatch) -> RecordResult<StockItem> {
        let _guard = self.write_guard()?;
        let mut snapshot = self.store.load()?;
        let item = snapshot
            .stock
            .iter_mut()
            .find(|item| item.sku == sku)
            .ok_or_else(|| RecordError::not_found(format!("SKU {sku}")))?;
        item.merge(patch, Utc::now());
        let updated = item.clone();
        self.store.save(&snapshot)?;
        Ok(updated)
    }

    pub fn order_get(&self, order_id: &str) -> RecordResult<SalesOrder> {
        let snapshot = self.store.load()?;
        snapshot
            .orders
            .into_iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| RecordError::not_found(format!("Order {order_id}")))
    }

    pub fn order_list(&self) -> RecordResult<Vec<SalesOrder>> {
        Ok(self.store.load()?.orders)
    }

    pub fn order_update(&self, order_id: &str, patch: SalesOrderPatch) -> RecordResult<SalesOrder> {
        let _guard = self.write_guard()?;
        let mut snapshot = self.store.load()?;
        let order = snapshot
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| RecordError::not_found(format!("Order {order_id}")))?;
        order.merge(patch, Utc::now());
        let updated = order.clone();
        self.store.save(&snapshot)?;
        Ok(updated)
    }

    pub fn purchase_get(&self, po_id: &str) -> RecordResult<PurchaseOrder> {
        let snapshot = self.store.load()?;
        snapshot
            .purchase_orders
            .into_iter()
            .find(|po| po.id == po_id)
            .ok_or_else(|| RecordError::not_found(format!("Purchase order {po_id}")))
    }

    pub fn purchase_list(&self) -> RecordResult<Vec<PurchaseOrder>> {
        Ok(self.store.load()?.purchase_orders)
    }

    pub fn purchase_update(
        &self,
        po_id: &str,
        patch: PurchaseOrderPatch,
    ) -> RecordResult<PurchaseOrder> {
        patch.validate()?;
        let _guard = self.write_guard()?;
        let mut snapshot = self.store.load()?;
        let po = snapshot
            .purchase_orders
            .iter_mut()
            .find(|po| po.id == po_id)
            .ok_or_else(|| RecordError::not_found(format!("Purchase order {po_id}")))?;
        po.merge(patch, Utc::now());
        let updated = po.clone();
        self.store.save(&snapshot)?;
        Ok(updated)
    }

    /// Create a purchase order against an existing SKU.
    ///
    /// The referenced SKU must already be in stock. Supplier and unit price
    /// fall back to the configured defaults when the caller leaves them out.
    pub fn purchase_create(&self, new: NewPurchaseOrder) -> RecordResult<PurchaseOrder> {
        new.validate()?;
        let _guard = self.write_guard()?;
        let mut snapshot = self.store.load()?;

        if !snapshot.stock.iter().any(|item| item.sku == new.sku) {
            return Err(RecordError::reference(format!(
                "SKU {} does not exist in stock",
                new.sku
            )));
        }

        let taken: HashSet<&str> = snapshot
            .purchase_orders
            .iter()
            .map(|po| po.id.as_str())
            .collect();
        let id = stockroom_purchasing::allocate_id(&taken, stockroom_purchasing::candidate_id)?;

        let unit_price = new.unit_price.unwrap_or(self.defaults.unit_price);
        let supplier_id = new
            .supplier_id
            .unwrap_or_else(|| self.defaults.supplier_id.clone());
        let now = Utc::now();
        let order = PurchaseOrder {
            id,
            sku: new.sku,
            quantity: new.quantity,
            status: "Pending".to_string(),
            supplier_id,
            unit_price,
            total_amount: PurchaseOrder::total_for(new.quantity, unit_price),
            created_at: now,
            updated_at: now,
        };

        snapshot.purchase_orders.push(order.clone());
        self.store.save(&snapshot)?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::persistence::InMemorySnapshotStore;
    use crate::seed::demo_snapshot;

    fn seeded_store() -> RecordStore<InMemorySnapshotStore> {
        RecordStore::new(
            InMemorySnapshotStore::with_snapshot(demo_snapshot()),
            PurchasingDefaults::default(),
        )
    }

    #[test]
    fn stock_get_finds_seeded_sku() {
        let store = seeded_store();
        let item = store.stock_get("SKU123").unwrap();
        assert_eq!(item.available_qty, 100);
        assert_eq!(item.location, "A1");
    }

    #[test]
    fn stock_get_unknown_sku_is_not_found() {
        let store = seeded_store();
        let err = store.stock_get("SKU999").unwrap_err();
        assert_eq!(err, RecordError::not_found("SKU SKU999"));
    }

    #[test]
    fn stock_update_merges_only_supplied_fields() {
        let store = seeded_store();
        let before = store.stock_get("SKU456").unwrap();
        let patch = StockPatch {
            available_qty: Some(75),
            ..Default::default()
        };
        let after = store.stock_update("SKU456", patch).unwrap();
        assert_eq!(after.available_qty, 75);
        assert_eq!(after.reserved_qty, before.reserved_qty);
        assert_eq!(after.location, before.location);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn stock_update_persists_through_the_store() {
        let store = seeded_store();
        let patch = StockPatch {
            location: Some("D4".to_string()),
            ..Default::default()
        };
        store.stock_update("SKU789", patch).unwrap();
        assert_eq!(store.stock_get("SKU789").unwrap().location, "D4");
    }

    #[test]
    fn empty_patch_still_bumps_updated_at() {
        let store = seeded_store();
        let before = store.order_get("ORD1001").unwrap();
        let after = store
            .order_update("ORD1001", SalesOrderPatch::default())
            .unwrap();
        assert_eq!(after.status, before.status);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn order_update_unknown_id_is_not_found() {
        let store = seeded_store();
        let err = store
            .order_update("ORD9999", SalesOrderPatch::default())
            .unwrap_err();
        assert_eq!(err, RecordError::not_found("Order ORD9999"));
    }

    #[test]
    fn purchase_create_fills_defaults_and_totals() {
        let store = seeded_store();
        let order = store
            .purchase_create(NewPurchaseOrder {
                sku: "SKU123".to_string(),
                quantity: 10,
                supplier_id: None,
                unit_price: None,
            })
            .unwrap();
        assert_eq!(order.status, "Pending");
        assert_eq!(order.supplier_id, "SUPP001");
        assert_eq!(order.unit_price, Decimal::new(2500, 2));
        assert_eq!(order.total_amount, Decimal::new(25_000, 2));
        assert!(order.id.starts_with("PO"));
        assert_eq!(order.id.len(), 8);
    }

    #[test]
    fn purchase_create_rejects_unknown_sku() {
        let store = seeded_store();
        let before = store.purchase_list().unwrap().len();
        let err = store
            .purchase_create(NewPurchaseOrder {
                sku: "SKU000".to_string(),
                quantity: 5,
                supplier_id: None,
                unit_price: None,
            })
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::reference("SKU SKU000 does not exist in stock")
        );
        assert_eq!(store.purchase_list().unwrap().len(), before);
    }

    #[test]
    fn purchase_create_rejects_zero_quantity() {
        let store = seeded_store();
        let err = store
            .purchase_create(NewPurchaseOrder {
                sku: "SKU123".to_string(),
                quantity: 0,
                supplier_id: None,
                unit_price: None,
            })
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::validation("quantity must be a positive integer")
        );
    }

    #[test]
    fn purchase_update_recomputes_total_on_quantity_change() {
        let store = seeded_store();
        let created = store
            .purchase_create(NewPurchaseOrder {
                sku: "SKU123".to_string(),
                quantity: 4,
                supplier_id: None,
                unit_price: Some(Decimal::new(1000, 2)),
            })
            .unwrap();
        let patch = PurchaseOrderPatch {
            status: Some("Approved".to_string()),
            quantity: Some(6),
        };
        let updated = store.purchase_update(&created.id, patch).unwrap();
        assert_eq!(updated.status, "Approved");
        assert_eq!(updated.total_amount, Decimal::new(6000, 2));
    }

    #[test]
    fn purchase_update_rejects_zero_quantity_before_lookup() {
        let store = seeded_store();
        let patch = PurchaseOrderPatch {
            status: None,
            quantity: Some(0),
        };
        let err = store.purchase_update("PO000000", patch).unwrap_err();
        assert_eq!(
            err,
            RecordError::validation("quantity must be a positive integer")
        );
    }

    #[test]
    fn failed_save_surfaces_as_persistence_error() {
        let backing = InMemorySnapshotStore::with_snapshot(demo_snapshot());
        backing.fail_saves(true);
        let store = RecordStore::new(backing, PurchasingDefaults::default());
        let patch = StockPatch {
            available_qty: Some(1),
            ..Default::default()
        };
        let err = store.stock_update("SKU123", patch).unwrap_err();
        assert!(matches!(err, RecordError::Persistence(_)));
    }

    #[test]
    fn listing_an_empty_store_returns_empty_vectors() {
        let store = RecordStore::new(
            InMemorySnapshotStore::new(),
            PurchasingDefaults::default(),
        );
        assert!(store.stock_list().unwrap().is_empty());
        assert!(store.order_list().unwrap().is_empty());
        assert!(store.purchase_list().unwrap().is_empty());
    }

    #[test]
    fn concurrent_disjoint_field_updates_both_land() {
        let store = Arc::new(RecordStore::new(
            InMemorySnapshotStore::with_snapshot(demo_snapshot()),
            PurchasingDefaults::default(),
        ));

        // Two writers race on the same record with disjoint fields. With a
        // naive load-modify-save, one write would be lost.
        let a = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let patch = StockPatch {
                    available_qty: Some(1),
                    ..Default::default()
                };
                store.stock_update("SKU123", patch).unwrap();
            })
        };
        let b = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let patch = StockPatch {
                    reserved_qty: Some(2),
                    ..Default::default()
                };
                store.stock_update("SKU123", patch).unwrap();
            })
        };
        a.join().unwrap();
        b.join().unwrap();

        let item = store.stock_get("SKU123").unwrap();
        assert_eq!(item.available_qty, 1);
        assert_eq!(item.reserved_qty, 2);
    }
}
