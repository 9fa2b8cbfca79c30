use axum::{routing::get, Router};

use crate::app::AppState;

pub mod params;
pub mod products;
pub mod system;

/// Router for every catalog endpoint. `/products/:id` only reaches its
/// handler when the segment is an integer, see [`params::ProductIdParam`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(system::health))
        .merge(products::router())
}
