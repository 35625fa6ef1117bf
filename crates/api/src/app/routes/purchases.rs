use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;

use stockroom_infra::Action;

use crate::app::{GatewayDispatcher, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_purchase_order).get(list_purchase_orders))
        .route(
            "/:po_id",
            get(check_purchase_order).put(update_purchase_order),
        )
}

pub async fn create_purchase_order(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    body: Result<Json<dto::ParamMap>, JsonRejection>,
) -> axum::response::Response {
    let Json(params) = match body {
        Ok(json) => json,
        Err(rejection) => {
            return errors::envelope_error(
                StatusCode::BAD_REQUEST,
                format!("malformed request body: {rejection}"),
            );
        }
    };
    errors::respond(dispatcher.dispatch(Action::CreatePurchaseOrder.name(), &params))
}

pub async fn list_purchase_orders(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
) -> axum::response::Response {
    errors::respond(dispatcher.dispatch(Action::GetAllPurchaseOrders.name(), &dto::ParamMap::new()))
}

pub async fn check_purchase_order(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(po_id): Path<String>,
) -> axum::response::Response {
    let mut params = dto::ParamMap::new();
    params.insert("po_id".to_string(), Value::String(po_id));
    errors::respond(dispatcher.dispatch(Action::CheckPurchaseOrder.name(), &params))
}

pub async fn update_purchase_order(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(po_id): Path<String>,
    body: Result<Json<dto::ParamMap>, JsonRejection>,
) -> axum::response::Response {
    let Json(mut params) = match body {
        Ok(json) => json,
        Err(rejection) => {
            return errors::envelope_error(
                StatusCode::BAD_REQUEST,
                format!("malformed request body: {rejection}"),
            );
        }
    };
    params.insert("po_id".to_string(), Value::String(po_id));
    errors::respond(dispatcher.dispatch(Action::UpdatePurchaseOrder.name(), &params))
}
