use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;
use crate::query;

/// Default data set compiled into the binary.
const SEED_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// The immutable, ordered product catalog.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
/// There is deliberately no API to add, change or remove products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Assemble a catalog, enforcing positive and unique ids.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            let id = *product.id();
            if !id.is_positive() {
                return Err(DomainError::invariant(format!(
                    "product `{}` has non-positive id {id}",
                    product.name()
                )));
            }
            if !seen.insert(id) {
                return Err(DomainError::invariant(format!("duplicate product id {id}")));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::from_products(products)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    /// The embedded default catalog.
    pub fn seed() -> Result<Self, CatalogLoadError> {
        Self::from_json_str(SEED_JSON)
    }

    /// All products in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        query::filter_by_category(&self.products, category)
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        query::find_by_id(&self.products, id)
    }
}
