//! Products catalog module.
//!
//! This crate holds the read-only product catalog and the queries run
//! against it, implemented purely as deterministic domain logic (no HTTP,
//! no persistence beyond loading the initial data set).

pub mod catalog;
pub mod product;
pub mod query;

pub use catalog::{Catalog, CatalogLoadError};
pub use product::Product;
pub use query::{filter_by_category, find_by_id};
