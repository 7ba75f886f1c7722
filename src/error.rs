use thiserror::Error;

/// Text shown in place of the product grid whenever the catalog cannot be read.
pub const PRODUCTS_UNAVAILABLE: &str = "Error fetching products. Please try again later.";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Every failure collapses into the same message for the shopper.
    pub fn user_message(&self) -> &'static str {
        PRODUCTS_UNAVAILABLE
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog endpoint must be an http(s) URL, got {0:?}")]
    Endpoint(String),
}
