//! Catalog queries.
//!
//! Both operations are linear scans over the stored order; the catalog is
//! small and static, so no index is kept.

use catalog_core::{Entity, ProductId};

use crate::product::Product;

/// Every product whose category equals `category`, ignoring case.
///
/// An empty `category` only matches products with an empty category; the
/// "no filter" case is decided by the caller, not here.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.in_category(category)).collect()
}

/// First product with the given id.
pub fn find_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| *p.id() == id)
}
