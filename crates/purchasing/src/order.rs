use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{RecordError, RecordResult};

/// A purchase order record. Ids are store-generated (see [`crate::id`]);
/// `total_amount` is always `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub sku: String,
    pub quantity: u32,
    pub status: String,
    pub supplier_id: String,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a purchase order. A quantity change recomputes the
/// total at the stored unit price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PurchaseOrderPatch {
    pub status: Option<String>,
    pub quantity: Option<u32>,
}

/// Creation parameters. Optional fields fall back to the configured
/// purchasing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPurchaseOrder {
    pub sku: String,
    pub quantity: u32,
    pub supplier_id: Option<String>,
    pub unit_price: Option<Decimal>,
}

impl PurchaseOrder {
    pub fn total_for(quantity: u32, unit_price: Decimal) -> Decimal {
        Decimal::from(quantity) * unit_price
    }

    /// Apply a partial update, overwriting only the supplied fields and
    /// keeping the total consistent. `updated_at` is bumped
    /// unconditionally.
    pub fn merge(&mut self, patch: PurchaseOrderPatch, now: DateTime<Utc>) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
            self.total_amount = Self::total_for(quantity, self.unit_price);
        }
        self.updated_at = now;
    }
}

impl PurchaseOrderPatch {
    /// Quantity, when supplied, must stay positive.
    pub fn validate(&self) -> RecordResult<()> {
        if self.quantity == Some(0) {
            return Err(RecordError::validation("quantity must be a positive integer"));
        }
        Ok(())
    }
}

impl NewPurchaseOrder {
    pub fn validate(&self) -> RecordResult<()> {
        if self.quantity == 0 {
            return Err(RecordError::validation("quantity must be a positive integer"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_po() -> PurchaseOrder {
        let now = Utc::now();
        PurchaseOrder {
            id: "POAB12CD".to_string(),
            sku: "SKU123".to_string(),
            quantity: 50,
            status: "Pending".to_string(),
            supplier_id: "SUPP001".to_string(),
            unit_price: Decimal::new(2500, 2),
            total_amount: PurchaseOrder::total_for(50, Decimal::new(2500, 2)),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn quantity_patch_recomputes_total() {
        let mut po = test_po();

        po.merge(
            PurchaseOrderPatch {
                status: None,
                quantity: Some(80),
            },
            Utc::now(),
        );

        assert_eq!(po.quantity, 80);
        assert_eq!(po.total_amount, Decimal::new(200_000, 2));
        assert_eq!(po.status, "Pending");
    }

    #[test]
    fn status_patch_leaves_total_alone() {
        let mut po = test_po();
        let total_before = po.total_amount;

        po.merge(
            PurchaseOrderPatch {
                status: Some("Approved".to_string()),
                quantity: None,
            },
            Utc::now(),
        );

        assert_eq!(po.status, "Approved");
        assert_eq!(po.total_amount, total_before);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let new = NewPurchaseOrder {
            sku: "SKU123".to_string(),
            quantity: 0,
            supplier_id: None,
            unit_price: None,
        };
        assert!(new.validate().is_err());

        let patch = PurchaseOrderPatch {
            status: None,
            quantity: Some(0),
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn new_order_decodes_without_optional_fields() {
        let new: NewPurchaseOrder = serde_json::from_value(serde_json::json!({
            "sku": "SKU456",
            "quantity": 10,
        }))
        .unwrap();
        assert_eq!(new.supplier_id, None);
        assert_eq!(new.unit_price, None);
    }

    proptest! {
        #[test]
        fn total_stays_consistent_under_patches(
            quantities in proptest::collection::vec(1u32..10_000, 1..6),
        ) {
            let mut po = test_po();
            for quantity in quantities {
                po.merge(
                    PurchaseOrderPatch { status: None, quantity: Some(quantity) },
                    Utc::now(),
                );
                prop_assert_eq!(
                    po.total_amount,
                    PurchaseOrder::total_for(po.quantity, po.unit_price)
                );
            }
        }
    }
}
