//! HTTP application wiring (Axum router + dispatcher wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per record family)
//! - `dto.rs`: the loosely-typed request body alias
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use stockroom_infra::{Dispatcher, JsonFileStore, PurchasingDefaults, RecordStore};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// The dispatcher variant the gateway serves.
pub type GatewayDispatcher = Dispatcher<JsonFileStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: JsonFileStore, defaults: PurchasingDefaults) -> Router {
    let dispatcher: Arc<GatewayDispatcher> =
        Arc::new(Dispatcher::new(RecordStore::new(store, defaults)));

    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::log_requests))
            .layer(Extension(dispatcher)),
    )
}
