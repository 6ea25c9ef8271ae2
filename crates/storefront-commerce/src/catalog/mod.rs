//! Catalog module.
//!
//! Contains the product type and the sources a catalog is fetched from.

mod product;
mod source;

pub use product::Product;
pub use source::{from_fn, CatalogSource, FetchResult, FnSource, ProductsResponse, StaticSource};
