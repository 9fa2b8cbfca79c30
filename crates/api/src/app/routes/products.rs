use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::app::dto::ListProductsQuery;
use crate::app::errors::ApiError;
use crate::app::routes::params::ProductIdParam;
use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// `GET /products[?category=<category>]`. Always 200.
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    match ListProductsQuery::from_pairs(pairs).category {
        Some(category) => {
            let items = state.catalog.filter_by_category(&category);
            tracing::debug!(%category, matched = items.len(), "filtering products by category");
            Json(items).into_response()
        }
        None => Json(state.catalog.all()).into_response(),
    }
}

/// `GET /products/:id`.
pub async fn get_product(
    State(state): State<AppState>,
    ProductIdParam(id): ProductIdParam,
) -> Result<Response, ApiError> {
    let product = id
        .and_then(|id| state.catalog.find_by_id(id))
        .ok_or(ApiError::ProductNotFound)?;
    Ok(Json(product).into_response())
}
