use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sales order record, keyed by a caller-assigned id.
///
/// `status` is a free-form label. `Pending`, `Processing`, `Shipped`,
/// `Delivered` and `Cancelled` are the conventional values, but the store
/// does not reject others: documents written by earlier tooling carry
/// ad-hoc statuses and must keep loading. `eta` is display text, not a
/// parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub status: String,
    pub eta: String,
    pub total_amount: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a sales order. Absent fields are left untouched;
/// an explicit JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SalesOrderPatch {
    pub status: Option<String>,
    pub eta: Option<String>,
}

impl SalesOrder {
    /// Apply a partial update, overwriting only the supplied fields.
    /// `updated_at` is bumped unconditionally.
    pub fn merge(&mut self, patch: SalesOrderPatch, now: DateTime<Utc>) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(eta) = patch.eta {
            self.eta = eta;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_order() -> SalesOrder {
        SalesOrder {
            id: "ORD1001".to_string(),
            status: "Processing".to_string(),
            eta: "2025-09-01".to_string(),
            total_amount: Decimal::new(125_000, 2),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut order = test_order();
        let patch = SalesOrderPatch {
            status: Some("Shipped".to_string()),
            eta: None,
        };

        order.merge(patch, Utc::now());

        assert_eq!(order.status, "Shipped");
        assert_eq!(order.eta, "2025-09-01");
        assert_eq!(order.total_amount, Decimal::new(125_000, 2));
    }

    #[test]
    fn unconventional_status_is_accepted() {
        let mut order = test_order();
        order.merge(
            SalesOrderPatch {
                status: Some("on hold (customs)".to_string()),
                eta: None,
            },
            Utc::now(),
        );
        assert_eq!(order.status, "on hold (customs)");
    }

    #[test]
    fn order_decodes_from_document_form() {
        let order: SalesOrder = serde_json::from_value(serde_json::json!({
            "id": "ORD1002",
            "status": "Shipped",
            "eta": "2025-08-25",
            "total_amount": 499.5,
            "updated_at": "2025-08-01T09:00:00Z",
        }))
        .unwrap();
        assert_eq!(order.total_amount, Decimal::new(4995, 1));
    }

    proptest! {
        #[test]
        fn merge_never_touches_id_or_total(
            status in proptest::option::of("[A-Za-z ]{1,12}"),
            eta in proptest::option::of("[0-9-]{1,10}"),
        ) {
            let mut order = test_order();
            let patch = SalesOrderPatch { status: status.clone(), eta: eta.clone() };

            order.merge(patch, Utc::now());

            prop_assert_eq!(order.id.as_str(), "ORD1001");
            prop_assert_eq!(order.total_amount, Decimal::new(125_000, 2));
            prop_assert_eq!(order.status, status.unwrap_or_else(|| "Processing".to_string()));
            prop_assert_eq!(order.eta, eta.unwrap_or_else(|| "2025-09-01".to_string()));
        }
    }
}
