use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::app::{GatewayDispatcher, dto, errors};

/// Uniform dispatch endpoint: the body names the action, everything else in
/// the object is passed through as parameters.
pub async fn dispatch_action(
    Extension(dispatcher): Extension<Arc<GatewayDispatcher>>,
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

    let action = match params.remove("action") {
        Some(Value::String(name)) => name,
        Some(_) => {
            return errors::envelope_error(StatusCode::BAD_REQUEST, "action must be a string");
        }
        None => {
            return errors::envelope_error(
                StatusCode::BAD_REQUEST,
                "missing required parameter(s): action",
            );
        }
    };

    errors::respond(dispatcher.dispatch(&action, &params))
}
