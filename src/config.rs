use serde::Deserialize;

use crate::catalog::{ProductSource, RemoteCatalog, StaticCatalog, DEFAULT_ENDPOINT};
use crate::error::ConfigError;
use crate::models::Category;

/// When the remote read happens relative to the first paint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    BeforeRender,
    #[default]
    AfterRender,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    #[default]
    Static,
    Remote {
        #[serde(default = "default_endpoint")]
        endpoint: String,
        #[serde(default)]
        mode: FetchMode,
    },
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Host-supplied settings, e.g.
/// `{"source": {"kind": "remote", "mode": "after_render"}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn remote(endpoint: impl Into<String>, mode: FetchMode) -> Self {
        Self {
            source: SourceConfig::Remote {
                endpoint: endpoint.into(),
                mode,
            },
            categories: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let SourceConfig::Remote { endpoint, .. } = &self.source {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::Endpoint(endpoint.clone()));
            }
        }
        Ok(())
    }

    /// Static sources always behave as if resolved before render.
    pub fn fetch_mode(&self) -> FetchMode {
        match &self.source {
            SourceConfig::Static => FetchMode::BeforeRender,
            SourceConfig::Remote { mode, .. } => *mode,
        }
    }

    pub fn product_source(&self) -> ProductSource {
        match &self.source {
            SourceConfig::Static => ProductSource::Static(StaticCatalog),
            SourceConfig::Remote { endpoint, .. } => {
                ProductSource::Remote(RemoteCatalog::new(endpoint.clone()))
            }
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        if let Some(categories) = &self.categories {
            return categories.clone();
        }
        let labels: [&str; 4] = match self.source {
            SourceConfig::Static => ["Men", "Women", "Kids", "Accessories"],
            SourceConfig::Remote { .. } => {
                ["Men's Clothing", "Women's Clothing", "Jewelery", "Electronics"]
            }
        };
        labels.into_iter().map(Category::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_means_static() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.fetch_mode(), FetchMode::BeforeRender);
        assert!(matches!(config.product_source(), ProductSource::Static(_)));
        assert_eq!(config.categories()[0], Category::new("Men"));
    }

    #[test]
    fn remote_defaults_to_demo_endpoint_after_render() {
        let config = StorefrontConfig::from_json(r#"{"source":{"kind":"remote"}}"#).unwrap();
        assert_eq!(config, StorefrontConfig::remote(DEFAULT_ENDPOINT, FetchMode::AfterRender));

        match config.product_source() {
            ProductSource::Remote(catalog) => assert_eq!(catalog.endpoint(), DEFAULT_ENDPOINT),
            other => panic!("expected remote source, got {other:?}"),
        }
        assert_eq!(config.categories().len(), 4);
        assert_eq!(config.categories()[0].anchor(), "#men's-clothing");
    }

    #[test]
    fn before_render_mode_parses() {
        let config = StorefrontConfig::from_json(
            r#"{"source":{"kind":"remote","endpoint":"http://localhost:8080/p","mode":"before_render"}}"#,
        )
        .unwrap();
        assert_eq!(config.fetch_mode(), FetchMode::BeforeRender);
    }

    #[test]
    fn category_override_wins() {
        let config = StorefrontConfig::from_json(r#"{"categories":["Shoes","Bags"]}"#).unwrap();
        assert_eq!(config.categories(), vec![Category::new("Shoes"), Category::new("Bags")]);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = StorefrontConfig::from_json(
            r#"{"source":{"kind":"remote","endpoint":"ftp://example.com/products"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint(_)));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = StorefrontConfig::from_json(r#"{"source":{"kind":"graphql"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
