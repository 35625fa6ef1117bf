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
        .route("/", get(list_stock))
        .route("/:sku", get(check_stock).put(update_stock))
}

pub async fn list_stock(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
) -> axum::response::Response {
    errors::respond(dispatcher.dispatch(Action::GetAllStock.name(), &dto::ParamMap::new()))
}

pub async fn check_stock(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    let mut params = dto::ParamMap::new();
    params.insert("sku".to_string(), Value::String(sku));
    errors::respond(dispatcher.dispatch(Action::CheckStock.name(), &params))
}

pub async fn update_stock(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
    Path(sku): Path<String>,
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
    // The path segment is authoritative, whatever the body says.
    params.insert("sku".to_string(), Value::String(sku));
    errors::respond(dispatcher.dispatch(Action::UpdateStock.name(), &params))
}
