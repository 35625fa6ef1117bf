use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use stockroom_infra::Action;

use crate::app::{GatewayDispatcher, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders))
        .route("/:order_id", get(check_order_status).put(update_order))
}

pub async fn list_orders(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
) -> axum::response::Response {
    errors::respond(dispatcher.dispatch(Action::GetAllOrders.name(), &dto::ParamMap::new()))
}

pub async fn check_order_status(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(order_id): Path<String>,
) -> axum::response::Response {
    let mut params = dto::ParamMap::new();
    params.insert("order_id".to_string(), Value::String(order_id));
    errors::respond(dispatcher.dispatch(Action::CheckOrderStatus.name(), &params))
}

pub async fn update_order(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(order_id): Path<String>,
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
    params.insert("order_id".to_string(), Value::String(order_id));
    errors::respond(dispatcher.dispatch(Action::UpdateOrder.name(), &params))
}
