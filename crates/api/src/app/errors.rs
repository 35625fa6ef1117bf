use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use stockroom_core::{Envelope, RecordError};
use stockroom_infra::{DispatchError, Dispatched};

/// Turn a dispatch outcome into an HTTP response: 201 for creations, 200 for
/// everything else that succeeded, and a failure envelope otherwise.
pub fn respond(result: Result<Dispatched, DispatchError>) -> axum::response::Response {
    match result {
        Ok(out) => {
            let status = if out.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(out.envelope)).into_response()
        }
        Err(err) => dispatch_error_to_response(err),
    }
}

pub fn dispatch_error_to_response(err: DispatchError) -> axum::response::Response {
    let status = match &err {
        DispatchError::UnknownAction(_)
        | DispatchError::MissingParams(_)
        | DispatchError::InvalidParams(_) => StatusCode::BAD_REQUEST,
        DispatchError::Record(record) => match record {
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::Validation(_) | RecordError::Reference(_) => StatusCode::BAD_REQUEST,
            RecordError::Persistence(_) | RecordError::IdSpaceExhausted(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
    };
    envelope_error(status, err.to_string())
}

pub fn envelope_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(Envelope::failure(message))).into_response()
}
