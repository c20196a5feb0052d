use crate::api::{CatalogApi, HttpCatalogApi};
use crate::clients::{CommentClient, ProductClient};
use crate::config::CatalogConfig;
use crate::{comment_store, product_store};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// The running catalog: both stores and their clients.
///
/// # Example
///
/// ```rust
/// use product_catalog::api::FakeCatalogApi;
/// use product_catalog::lifecycle::CatalogSystem;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::with_api(Arc::new(FakeCatalogApi::default()), 8);
///     system.product_client.fetch_all().await.unwrap();
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    /// Client for the product store
    pub product_client: ProductClient,

    /// Client for the comment store
    pub comment_client: CommentClient,

    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts the stores against the HTTP API described by `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, LifecycleError> {
        let api = HttpCatalogApi::new(config)?;
        info!(api_url = %config.api_url, "Connecting to catalog API");
        Ok(Self::with_api(Arc::new(api), config.store_buffer))
    }

    /// Starts the stores against any API implementation.
    pub fn with_api(api: Arc<dyn CatalogApi>, store_buffer: usize) -> Self {
        let (product_actor, product_handle) = product_store::new(store_buffer);
        let (comment_actor, comment_handle) = comment_store::new(store_buffer);

        let product_task = tokio::spawn(product_actor.run());
        let comment_task = tokio::spawn(comment_actor.run());

        Self {
            product_client: ProductClient::new(product_handle, Arc::clone(&api)),
            comment_client: CommentClient::new(comment_handle, api),
            handles: vec![product_task, comment_task],
        }
    }

    /// Drops the clients and waits for both stores to stop.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down catalog...");

        drop(self.product_client);
        drop(self.comment_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
