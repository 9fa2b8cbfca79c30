use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::app::dto::ErrorResponse;

/// Errors surfaced to API clients with a JSON body.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Product not found")]
    ProductNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_error(self.status(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// No route matched the request, including `/products/<id>` with a
/// non-numeric segment. Bare 404, no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteNotMatched;

impl IntoResponse for RouteNotMatched {
    fn into_response(self) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Router fallback.
pub async fn route_not_found() -> RouteNotMatched {
    RouteNotMatched
}
