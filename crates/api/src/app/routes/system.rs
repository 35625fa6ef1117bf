use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use stockroom_core::Envelope;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Stockroom ERP API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "stock": "/stock/:sku",
            "orders": "/orders/:order_id",
            "purchase_orders": "/purchase-orders/:po_id",
            "actions": "/actions",
            "health": "/health",
        },
        "timestamp": Utc::now(),
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "status": "alive",
        "message": "Stockroom ERP API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

pub async fn not_found(uri: Uri) -> axum::response::Response {
    let mut envelope = Envelope::failure("Endpoint not found");
    envelope.message = Some(format!(
        "The requested endpoint {} does not exist",
        uri.path()
    ));
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}
