//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;

use catalog_products::Catalog;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// State shared by every handler. The catalog is read-only, so handlers
/// need no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(catalog: Arc<Catalog>) -> Router {
    routes::router()
        .fallback(errors::route_not_found)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
        .with_state(AppState::new(catalog))
}
