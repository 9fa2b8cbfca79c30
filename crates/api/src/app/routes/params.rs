//! Route-parameter validation for `/products/:id`.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use catalog_core::id::is_decimal_digits;
use catalog_core::ProductId;

use crate::app::errors::RouteNotMatched;

/// The `:id` segment of `/products/:id`, accepted only when it is a run of
/// ASCII digits. Anything else rejects with [`RouteNotMatched`] before a
/// handler runs.
///
/// `None` means the segment was numeric but too large to be any stored id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdParam(pub Option<ProductId>);

impl ProductIdParam {
    pub fn parse(raw: &str) -> Result<Self, RouteNotMatched> {
        if !is_decimal_digits(raw) {
            return Err(RouteNotMatched);
        }
        Ok(Self(raw.parse().ok()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductIdParam
where
    S: Send + Sync,
{
    type Rejection = RouteNotMatched;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RouteNotMatched)?;
        Self::parse(&raw)
    }
}
