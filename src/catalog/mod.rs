//! Where the landing page gets its products from.

pub mod remote;
pub mod sample;
#[cfg(test)]
pub(crate) mod testing;

use leptos::logging::warn;

use crate::error::CatalogError;
use crate::models::Product;

pub use remote::{decode_products, RemoteCatalog, DEFAULT_ENDPOINT};
pub use sample::StaticCatalog;

/// One data source per deployment, picked from [`crate::config::StorefrontConfig`].
#[derive(Clone, Debug)]
pub enum ProductSource {
    Static(StaticCatalog),
    Remote(RemoteCatalog),
}

impl ProductSource {
    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            ProductSource::Static(catalog) => Ok(catalog.products()),
            ProductSource::Remote(catalog) => catalog.fetch().await,
        }
    }

    /// Loads once and folds the outcome into a renderable status.
    pub async fn resolve(&self) -> CatalogStatus {
        CatalogStatus::settle(self.load().await)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready(Vec<Product>),
    Unavailable(String),
}

impl CatalogStatus {
    pub fn settle(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => CatalogStatus::Ready(products),
            Err(e) => {
                warn!("product list unavailable: {e}");
                CatalogStatus::Unavailable(e.user_message().to_string())
            }
        }
    }
}
