//! Cart state and catalog query layer for storefront views.
//!
//! This crate holds the state a storefront UI renders from, with no
//! rendering or transport of its own:
//!
//! - **Cart**: visibility flag and deduplicated selected items
//! - **Catalog**: products and the sources they are fetched from
//! - **Search**: title filtering, count labels, fetch status
//! - **Session**: one owner of the above per shopper
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let mut session = StorefrontSession::default();
//!
//! // Fetch the catalog through whatever transport the app uses
//! let source = from_fn(|| async { fetch_products_over_http().await });
//! session.load_catalog(&source).await;
//!
//! // Filter it
//! let view = session.catalog_mut().search("relógio");
//! println!("{} ({} shown)", view.count_label, view.visible_products.len());
//!
//! // Put something in the cart
//! let state = session.cart_mut().add_product(&view.visible_products[0]);
//! assert_eq!(state.items.len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod search;
pub mod session;

pub use error::{ConfigError, FetchError};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, FetchError};
    pub use crate::ids::ProductId;

    // Cart
    pub use crate::cart::{CartItem, CartState, CartStore};

    // Catalog
    pub use crate::catalog::{
        from_fn, CatalogSource, FetchResult, FnSource, Product, ProductsResponse, StaticSource,
    };

    // Search
    pub use crate::search::{
        CatalogQuery, CatalogStatus, CatalogViewState, CountLabel, LoadTicket, TitleFilter,
    };

    // Config & session
    pub use crate::config::{CartConfig, CatalogConfig, StorefrontConfig};
    pub use crate::session::StorefrontSession;
}
