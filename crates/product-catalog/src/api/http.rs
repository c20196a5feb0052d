//! HTTP implementation of [`CatalogApi`] on top of `reqwest`.

use super::{ApiError, CatalogApi, Operation};
use crate::config::CatalogConfig;
use crate::model::{Comment, Product, ProductDraft, ProductId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Error body the catalog server sends along with a non-success status.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Catalog API client for a remote server.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a client from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and decodes a JSON success body.
    async fn fetch<T: DeserializeOwned>(
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = Self::send(operation, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::network(operation, e.to_string()))
    }

    /// Sends the request and turns a non-success status into an application failure.
    async fn send(operation: Operation, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request failed without response");
            ApiError::network(operation, e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());
        warn!(status = status.as_u16(), ?message, "Server rejected request");
        Err(ApiError::application(operation, status.as_u16(), message))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        let products: Vec<Product> =
            Self::fetch(Operation::FetchProducts, self.client.get(self.url("products"))).await?;
        debug!(count = products.len(), "Products received");
        Ok(products)
    }

    #[instrument(skip(self, draft))]
    async fn add_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!(?draft, "Sending request");
        Self::fetch(
            Operation::AddProduct,
            self.client.post(self.url("products")).json(draft),
        )
        .await
    }

    #[instrument(skip(self, product), fields(id = %product.id))]
    async fn edit_product(&self, product: &Product) -> Result<Product, ApiError> {
        debug!(?product, "Sending request");
        Self::fetch(
            Operation::EditProduct,
            self.client
                .put(self.url(&format!("products/{}", product.id)))
                .json(product),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<ProductId, ApiError> {
        debug!("Sending request");
        // The body is not needed: the requested id is what gets removed locally.
        Self::send(
            Operation::DeleteProduct,
            self.client.delete(self.url(&format!("products/{}", id))),
        )
        .await?;
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        debug!("Sending request");
        let comments: Vec<Comment> =
            Self::fetch(Operation::FetchComments, self.client.get(self.url("comments"))).await?;
        debug!(count = comments.len(), "Comments received");
        Ok(comments)
    }
}
