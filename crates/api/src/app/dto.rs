use serde::Serialize;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /products`.
///
/// Built from the raw key/value pairs so repeated keys never reject the
/// request: the first `category` wins. `?category=` and a bare `?category`
/// yield `Some("")`, a filter, not "absent".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

impl ListProductsQuery {
    pub const CATEGORY: &'static str = "category";

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .find(|(key, _)| key == Self::CATEGORY)
            .map(|(_, value)| value);
        Self { category }
    }
}

// -------------------------
// Response DTOs
// -------------------------

pub const WELCOME_MESSAGE: &str = "Welcome to the Product Catalog API!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: WELCOME_MESSAGE,
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Path templates advertised on `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub all_products: &'static str,
    pub product_by_id: &'static str,
    pub filter_by_category: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            all_products: "/products",
            product_by_id: "/products/<id>",
            filter_by_category: "/products?category=<category>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
}
