use serde_json::Value;
use stockroom_core::Envelope;

/// One readable line (or short block) per envelope, keyed by the action that
/// produced it.
pub fn summarize(action: &str, envelope: &Envelope) -> String {
    if !envelope.success {
        let error = envelope.error.as_deref().unwrap_or("unknown error");
        return format!("Error: {error}");
    }

    let data = envelope.data.clone().unwrap_or(Value::Null);
    match action {
        "check_stock" => format!(
            "{}: {} units available, {} units reserved at {}.",
            text(&data, "sku"),
            text(&data, "available_qty"),
            text(&data, "reserved_qty"),
            text(&data, "location"),
        ),
        "check_order_status" => format!(
            "Order {} → Status: {}, Expected delivery: {}, Total: {}.",
            text(&data, "id"),
            text(&data, "status"),
            text(&data, "eta"),
            money(&data, "total_amount"),
        ),
        "create_purchase_order" => format!(
            "Purchase order {} has been successfully created.\nSKU: {}, Quantity: {} units, Status: {}, Total Amount: {}.",
            text(&data, "id"),
            text(&data, "sku"),
            text(&data, "quantity"),
            text(&data, "status"),
            money(&data, "total_amount"),
        ),
        "get_all_stock" => list_or(&data, "No stock items available.", "Available stock:", |item| {
            format!(
                "{}: {} available at {}",
                text(item, "sku"),
                text(item, "available_qty"),
                text(item, "location"),
            )
        }),
        "get_all_orders" => list_or(&data, "No orders found.", "All orders:", |order| {
            format!(
                "{}: {} - ETA: {}",
                text(order, "id"),
                text(order, "status"),
                text(order, "eta"),
            )
        }),
        "get_all_purchase_orders" => {
            list_or(&data, "No purchase orders found.", "All purchase orders:", |po| {
                format!(
                    "{}: {} - {} units - {}",
                    text(po, "id"),
                    text(po, "sku"),
                    text(po, "quantity"),
                    text(po, "status"),
                )
            })
        }
        _ => envelope
            .message
            .clone()
            .unwrap_or_else(|| "Done.".to_string()),
    }
}

fn text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "?".to_string(),
    }
}

fn money(value: &Value, key: &str) -> String {
    format!(
        "${:.2}",
        value.get(key).and_then(Value::as_f64).unwrap_or_default()
    )
}

fn list_or(data: &Value, empty: &str, header: &str, line: impl Fn(&Value) -> String) -> String {
    match data.as_array() {
        Some(items) if !items.is_empty() => {
            let lines: Vec<String> = items.iter().map(line).collect();
            format!("{header}\n{}", lines.join("\n"))
        }
        _ => empty.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn failures_render_the_error() {
        let envelope = Envelope::failure("SKU SKU999 not found");
        assert_eq!(
            summarize("check_stock", &envelope),
            "Error: SKU SKU999 not found"
        );
    }

    #[test]
    fn stock_lines_read_naturally() {
        let envelope = Envelope::record(json!({
            "sku": "SKU123",
            "available_qty": 100,
            "reserved_qty": 20,
            "location": "A1",
        }));
        assert_eq!(
            summarize("check_stock", &envelope),
            "SKU123: 100 units available, 20 units reserved at A1."
        );
    }

    #[test]
    fn order_status_formats_money_with_two_decimals() {
        let envelope = Envelope::record(json!({
            "id": "ORD1001",
            "status": "Processing",
            "eta": "2025-09-01",
            "total_amount": 1250.0,
        }));
        assert_eq!(
            summarize("check_order_status", &envelope),
            "Order ORD1001 → Status: Processing, Expected delivery: 2025-09-01, Total: $1250.00."
        );
    }

    #[test]
    fn created_purchase_orders_get_a_detail_block() {
        let envelope = Envelope::mutated(
            json!({
                "id": "POABC123",
                "sku": "SKU456",
                "quantity": 50,
                "status": "Pending",
                "total_amount": 1250.0,
            }),
            "Purchase order POABC123 created successfully",
        );
        let rendered = summarize("create_purchase_order", &envelope);
        assert!(rendered.starts_with("Purchase order POABC123 has been successfully created."));
        assert!(rendered.contains("Quantity: 50 units"));
        assert!(rendered.ends_with("Total Amount: $1250.00."));
    }

    #[test]
    fn empty_lists_get_their_own_wording() {
        let envelope = Envelope::list(Vec::new());
        assert_eq!(
            summarize("get_all_stock", &envelope),
            "No stock items available."
        );
        assert_eq!(summarize("get_all_orders", &envelope), "No orders found.");
    }

    #[test]
    fn stock_lists_render_one_line_per_item() {
        let envelope = Envelope::list(vec![
            json!({"sku": "SKU123", "available_qty": 100, "location": "A1"}),
            json!({"sku": "SKU456", "available_qty": 50, "location": "B2"}),
        ]);
        assert_eq!(
            summarize("get_all_stock", &envelope),
            "Available stock:\nSKU123: 100 available at A1\nSKU456: 50 available at B2"
        );
    }

    #[test]
    fn mutations_fall_back_to_the_envelope_message() {
        let envelope = Envelope::mutated(json!({}), "Stock updated for SKU SKU123");
        assert_eq!(
            summarize("update_stock", &envelope),
            "Stock updated for SKU SKU123"
        );
    }
}
