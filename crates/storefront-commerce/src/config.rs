//! Storefront configuration.
//!
//! Read from TOML by default, or JSON when the file ends in `.json`:
//!
//! ```toml
//! [catalog]
//! endpoint = "/api/products"
//! error_message = "Problemas ao carregar a lista!"
//! label_singular = "Product"
//! label_plural = "Products"
//!
//! [cart]
//! empty_message = "Cart is empty"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::CountLabel;

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,
}

impl StorefrontConfig {
    /// Parse TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Load config from a file if it exists, falling back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no storefront config, using defaults");
            return Ok(Self::default());
        }

        Self::load(path)
            .with_context(|| format!("Failed to load storefront config: {}", path.display()))
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Toml(e.to_string()))
    }

    /// Reject configs that would render blank labels or messages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("catalog.label_singular", &self.catalog.label_singular),
            ("catalog.label_plural", &self.catalog.label_plural),
            ("catalog.error_message", &self.catalog.error_message),
            ("cart.empty_message", &self.cart.empty_message),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products endpoint, for transports that fetch over HTTP.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Message shown when the catalog fails to load.
    #[serde(default = "default_error_message")]
    pub error_message: String,

    /// Noun for a count of one.
    #[serde(default = "default_label_singular")]
    pub label_singular: String,

    /// Noun for every other count.
    #[serde(default = "default_label_plural")]
    pub label_plural: String,
}

impl CatalogConfig {
    /// Count label built from the configured nouns.
    pub fn count_label(&self) -> CountLabel {
        CountLabel::new(self.label_singular.clone(), self.label_plural.clone())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            error_message: default_error_message(),
            label_singular: default_label_singular(),
            label_plural: default_label_plural(),
        }
    }
}

fn default_endpoint() -> String {
    "/api/products".to_string()
}

fn default_error_message() -> String {
    "Problemas ao carregar a lista!".to_string()
}

fn default_label_singular() -> String {
    "Product".to_string()
}

fn default_label_plural() -> String {
    "Products".to_string()
}

/// Cart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Message shown when the cart has no items.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            empty_message: default_empty_message(),
        }
    }
}

fn default_empty_message() -> String {
    "Cart is empty".to_string()
}
