use crate::error::CatalogError;
use crate::models::Product;

pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Product list read from a JSON endpoint with a single GET.
#[derive(Clone, Debug)]
pub struct RemoteCatalog {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        decode_products(&body)
    }
}

/// Decodes a JSON array of product records, keeping order and duplicates.
pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::catalog::testing::{remote_catalog as catalog, serve_once};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn fetches_remote_shape() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"Shirt","price":19.5,"category":"men's clothing","image":"/x.jpg"}]"#,
        )
        .await;

        let products = catalog(url).fetch().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Shirt");
        assert_eq!(products[0].display_price(), "$19.50");
        assert_eq!(products[0].category, "men's clothing");
    }

    #[tokio::test]
    async fn empty_array_is_not_an_error() {
        let url = serve_once("200 OK", "[]").await;
        let products = catalog(url).fetch().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_fails() {
        let url = serve_once("503 Service Unavailable", r#"{"error":"down"}"#).await;
        let err = catalog(url).fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(503)));
    }

    #[tokio::test]
    async fn malformed_body_fails() {
        let url = serve_once("200 OK", r#"{"products":[]}"#).await;
        let err = catalog(url).fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails() {
        // Bind then drop so nothing is listening on the port.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = catalog(format!("http://{addr}/products"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn negative_price_is_malformed() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"Shirt","price":-5,"category":"men's clothing","image":"/x.jpg"}]"#,
        )
        .await;
        let err = catalog(url).fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn decode_keeps_order_and_duplicates() {
        let products = decode_products(
            r#"[
                {"id":2,"title":"B","price":1,"category":"c","image":"/b.jpg"},
                {"id":2,"title":"B","price":1,"category":"c","image":"/b.jpg"},
                {"id":1,"title":"A","price":2,"category":"c","image":"/a.jpg"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 2, 1]);
    }
}
