use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use stockroom_core::{Envelope, RecordError};
use stockroom_inventory::StockPatch;
use stockroom_purchasing::{NewPurchaseOrder, PurchaseOrderPatch};
use stockroom_sales::SalesOrderPatch;
use thiserror::Error;

use crate::persistence::SnapshotStore;
use crate::record_store::RecordStore;

/// The closed set of actions the store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckStock,
    GetAllStock,
    UpdateStock,
    CheckOrderStatus,
    GetAllOrders,
    UpdateOrder,
    CreatePurchaseOrder,
    CheckPurchaseOrder,
    GetAllPurchaseOrders,
    UpdatePurchaseOrder,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::CheckStock,
        Action::GetAllStock,
        Action::UpdateStock,
        Action::CheckOrderStatus,
        Action::GetAllOrders,
        Action::UpdateOrder,
        Action::CreatePurchaseOrder,
        Action::CheckPurchaseOrder,
        Action::GetAllPurchaseOrders,
        Action::UpdatePurchaseOrder,
    ];

    pub fn parse(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::CheckStock => "check_stock",
            Action::GetAllStock => "get_all_stock",
            Action::UpdateStock => "update_stock",
            Action::CheckOrderStatus => "check_order_status",
            Action::GetAllOrders => "get_all_orders",
            Action::UpdateOrder => "update_order",
            Action::CreatePurchaseOrder => "create_purchase_order",
            Action::CheckPurchaseOrder => "check_purchase_order",
            Action::GetAllPurchaseOrders => "get_all_purchase_orders",
            Action::UpdatePurchaseOrder => "update_purchase_order",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("missing required parameter(s): {0}")]
    MissingParams(String),
    #[error("invalid parameter(s): {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Outcome of a dispatched action: the response envelope, plus whether a
/// record was created (so the gateway can answer 201 instead of 200).
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub envelope: Envelope,
    pub created: bool,
}

impl Dispatched {
    fn ok(envelope: Envelope) -> Self {
        Self {
            envelope,
            created: false,
        }
    }

    fn created(envelope: Envelope) -> Self {
        Self {
            envelope,
            created: true,
        }
    }
}

/// Routes a named action with loosely-typed parameters to the record store.
///
/// Parameters arrive as a raw JSON object. Identifier values are cleaned up
/// (quotes, labels, surrounding whitespace) and numeric fields sent as
/// strings are coerced before decoding, so callers that assemble parameters
/// from text still land on the strict record types.
pub struct Dispatcher<S> {
    store: RecordStore<S>,
}

impl<S: SnapshotStore> Dispatcher<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self { store }
    }

    pub fn dispatch(
        &self,
        action: &str,
        params: &Map<String, Value>,
    ) -> Result<Dispatched, DispatchError> {
        let action = Action::parse(action)
            .ok_or_else(|| DispatchError::UnknownAction(action.to_string()))?;
        let params = sanitize_params(params);

        match action {
            Action::CheckStock => {
                let sku = require_str(&params, "sku")?;
                let item = self.store.stock_get(&sku)?;
                Ok(Dispatched::ok(Envelope::record(encode(&item)?)))
            }
            Action::GetAllStock => {
                let items = self.store.stock_list()?;
                Ok(Dispatched::ok(Envelope::list(encode_all(&items)?)))
            }
            Action::UpdateStock => {
                let sku = require_str(&params, "sku")?;
                let patch: StockPatch = decode_params(&params)?;
                let item = self.store.stock_update(&sku, patch)?;
                Ok(Dispatched::ok(Envelope::mutated(
                    encode(&item)?,
                    format!("Stock updated for SKU {sku}"),
                )))
            }
            Action::CheckOrderStatus => {
                let order_id = require_str(&params, "order_id")?;
                let order = self.store.order_get(&order_id)?;
                Ok(Dispatched::ok(Envelope::record(encode(&order)?)))
            }
            Action::GetAllOrders => {
                let orders = self.store.order_list()?;
                Ok(Dispatched::ok(Envelope::list(encode_all(&orders)?)))
            }
            Action::UpdateOrder => {
                let order_id = require_str(&params, "order_id")?;
                let patch: SalesOrderPatch = decode_params(&params)?;
                let order = self.store.order_update(&order_id, patch)?;
                Ok(Dispatched::ok(Envelope::mutated(
                    encode(&order)?,
                    format!("Order {order_id} updated"),
                )))
            }
            Action::CreatePurchaseOrder => {
                require_present(&params, &["sku", "quantity"])?;
                let new: NewPurchaseOrder = decode_params(&params)?;
                let order = self.store.purchase_create(new)?;
                let message = format!("Purchase order {} created successfully", order.id);
                Ok(Dispatched::created(Envelope::mutated(
                    encode(&order)?,
                    message,
                )))
            }
            Action::CheckPurchaseOrder => {
                let po_id = require_str(&params, "po_id")?;
                let order = self.store.purchase_get(&po_id)?;
                Ok(Dispatched::ok(Envelope::record(encode(&order)?)))
            }
            Action::GetAllPurchaseOrders => {
                let orders = self.store.purchase_list()?;
                Ok(Dispatched::ok(Envelope::list(encode_all(&orders)?)))
            }
            Action::UpdatePurchaseOrder => {
                let po_id = require_str(&params, "po_id")?;
                let patch: PurchaseOrderPatch = decode_params(&params)?;
                let order = self.store.purchase_update(&po_id, patch)?;
                Ok(Dispatched::ok(Envelope::mutated(
                    encode(&order)?,
                    format!("Purchase order {po_id} updated"),
                )))
            }
        }
    }
}

const KEY_PARAMS: [&str; 3] = ["sku", "order_id", "po_id"];
const NUMERIC_PARAMS: [&str; 4] = ["available_qty", "reserved_qty", "quantity", "unit_price"];

/// Clean identifier values and coerce stringly-typed numbers.
fn sanitize_params(params: &Map<String, Value>) -> Map<String, Value> {
    let mut sanitized = params.clone();
    for name in KEY_PARAMS {
        if let Some(Value::String(raw)) = sanitized.get(name) {
            let cleaned = normalize_key(name, raw);
            sanitized.insert(name.to_string(), Value::String(cleaned));
        }
    }
    for name in NUMERIC_PARAMS {
        if let Some(Value::String(raw)) = sanitized.get(name) {
            if let Some(number) = parse_number(raw.trim()) {
                sanitized.insert(name.to_string(), Value::Number(number));
            }
        }
    }
    sanitized
}

/// Strip quotes, whitespace, and a leading `name=` label from an identifier.
fn normalize_key(name: &str, raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let mut value = stripped.trim();
    let label = format!("{name}=");
    if value.len() >= label.len()
        && value.as_bytes()[..label.len()].eq_ignore_ascii_case(label.as_bytes())
    {
        value = value[label.len()..].trim();
    }
    value.to_string()
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(n) = raw.parse::<u64>() {
        return Some(Number::from(n));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

fn require_str(params: &Map<String, Value>, name: &str) -> Result<String, DispatchError> {
    match params.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(DispatchError::MissingParams(name.to_string())),
    }
}

fn require_present(params: &Map<String, Value>, names: &[&str]) -> Result<(), DispatchError> {
    let missing: Vec<&str> = names
        .iter()
        .filter(|name| match params.get(**name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .copied()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::MissingParams(missing.join(", ")))
    }
}

fn decode_params<T: DeserializeOwned>(params: &Map<String, Value>) -> Result<T, DispatchError> {
    serde_json::from_value(Value::Object(params.clone()))
        .map_err(|err| DispatchError::InvalidParams(err.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<Value, DispatchError> {
    serde_json::to_value(value)
        .map_err(|err| RecordError::persistence(format!("failed to encode record: {err}")).into())
}

fn encode_all<T: Serialize>(values: &[T]) -> Result<Vec<Value>, DispatchError> {
    values.iter().map(encode).collect()
}
