//! Per-shopper session state.
//!
//! The view layer constructs one [`StorefrontSession`] per shopper and hands
//! references to whichever handler needs the cart or the catalog. There is
//! no process-wide instance.

use crate::cart::CartStore;
use crate::catalog::CatalogSource;
use crate::config::StorefrontConfig;
use crate::error::ConfigError;
use crate::search::{CatalogQuery, CatalogStatus, CatalogViewState};

/// Cart and catalog state for one shopper, plus the config they render with.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    config: StorefrontConfig,
    cart: CartStore,
    catalog: CatalogQuery,
}

impl StorefrontSession {
    /// Create a session with an empty cart and an idle catalog.
    ///
    /// Fails if `config` does not pass [`StorefrontConfig::validate`].
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: StorefrontConfig) -> Self {
        let catalog = CatalogQuery::new().with_label(config.catalog.count_label());
        Self {
            config,
            cart: CartStore::new(),
            catalog,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The shopper's cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The shopper's cart, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The catalog query.
    pub fn catalog(&self) -> &CatalogQuery {
        &self.catalog
    }

    /// The catalog query, for mutation.
    pub fn catalog_mut(&mut self) -> &mut CatalogQuery {
        &mut self.catalog
    }

    /// Load the catalog from `source`.
    pub async fn load_catalog<S>(&mut self, source: &S) -> CatalogViewState
    where
        S: CatalogSource + ?Sized,
    {
        self.catalog.load(source).await
    }

    /// Failure message to render, if the last catalog load failed.
    pub fn error_message(&self) -> Option<&str> {
        (self.catalog.status() == CatalogStatus::Error)
            .then_some(self.config.catalog.error_message.as_str())
    }

    /// Empty-cart message to render, if the cart has no items.
    pub fn cart_empty_message(&self) -> Option<&str> {
        self.cart
            .is_empty()
            .then_some(self.config.cart.empty_message.as_str())
    }
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::with_valid_config(StorefrontConfig::default())
    }
}
