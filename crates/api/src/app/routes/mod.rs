use axum::{
    Router,
    routing::{get, post},
};

pub mod actions;
pub mod orders;
pub mod purchases;
pub mod stock;
pub mod system;

/// Router for all gateway endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/actions", post(actions::dispatch_action))
        .nest("/stock", stock::router())
        .nest("/orders", orders::router())
        .nest("/purchase-orders", purchases::router())
        .fallback(system::not_found)
}
