//! # Product Client
//!
//! Provides a high-level API for the product store. Every remote operation is recorded on the
//! store as a `Pending` action followed by its outcome, and the outcome is also returned to
//! the caller.
use crate::api::{ApiError, CatalogApi};
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_store::{ProductAction, ProductReducer, ProductState, ProductStoreError};
use async_trait::async_trait;
use std::sync::Arc;
use store_framework::{FrameworkError, Phase, StoreClient, StoreHandle};
use tracing::{debug, instrument, warn};

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreHandle<ProductReducer>,
    api: Arc<dyn CatalogApi>,
}

#[async_trait]
impl StoreClient<ProductReducer> for ProductClient {
    type Error = ProductStoreError;

    fn inner(&self) -> &StoreHandle<ProductReducer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductStoreError::StoreCommunication(e.to_string())
    }
}

impl ProductClient {
    pub fn new(inner: StoreHandle<ProductReducer>, api: Arc<dyn CatalogApi>) -> Self {
        Self { inner, api }
    }

    /// The most recently published state, without a round trip to the store.
    pub fn state(&self) -> ProductState {
        self.inner.subscribe().borrow().clone()
    }

    /// Fetches the whole collection and replaces the local items.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ProductStoreError> {
        let request = self.inner.next_request();
        self.send(ProductAction::FetchAll(request, Phase::Pending))
            .await?;
        debug!(%request, "Sending request");
        let result = self.api.list_products().await;
        self.settle(result, |phase| ProductAction::FetchAll(request, phase))
            .await
    }

    /// Creates a product. The store does not re-validate the draft.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add(&self, draft: ProductDraft) -> Result<Product, ProductStoreError> {
        let request = self.inner.next_request();
        self.send(ProductAction::Add(request, Phase::Pending)).await?;
        debug!(%request, ?draft, "Sending request");
        let result = self.api.add_product(&draft).await;
        self.settle(result, |phase| ProductAction::Add(request, phase))
            .await
    }

    /// Replaces the product with the same id.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn edit(&self, product: Product) -> Result<Product, ProductStoreError> {
        let request = self.inner.next_request();
        self.send(ProductAction::Edit(request, Phase::Pending)).await?;
        debug!(%request, ?product, "Sending request");
        let result = self.api.edit_product(&product).await;
        self.settle(result, |phase| ProductAction::Edit(request, phase))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<ProductId, ProductStoreError> {
        let request = self.inner.next_request();
        self.send(ProductAction::Delete(request, Phase::Pending))
            .await?;
        debug!(%request, "Sending request");
        let result = self.api.delete_product(id).await;
        self.settle(result, |phase| ProductAction::Delete(request, phase))
            .await
    }

    /// Sets or clears the product the edit form works on. Local only.
    #[instrument(skip_all)]
    pub async fn set_editing_target(
        &self,
        target: Option<Product>,
    ) -> Result<(), ProductStoreError> {
        self.send(ProductAction::SetEditingTarget(target)).await
    }

    async fn send(&self, action: ProductAction) -> Result<(), ProductStoreError> {
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }

    /// Records the outcome on the store and hands it back to the caller.
    async fn settle<T: Clone>(
        &self,
        result: Result<T, ApiError>,
        action: impl FnOnce(Phase<T>) -> ProductAction,
    ) -> Result<T, ProductStoreError> {
        if let Err(e) = &result {
            warn!(error = %e, "Request failed");
        }
        let phase = Phase::settle(result.clone());
        debug!(phase = phase.label(), "Recording outcome");
        self.send(action(phase)).await?;
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FakeCatalogApi, Operation};
    use crate::model::Size;
    use store_framework::mock::{create_mock_handle, expect_dispatch, MockStore};
    use store_framework::RequestId;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            image_url: "https://img.example/p.png".to_string(),
            count: 3,
            size: Size {
                width: 10.0,
                height: 20.0,
            },
            weight: "250g".to_string(),
            comments: vec![],
        }
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            image_url: "https://img.example/new.png".to_string(),
            count: 1,
            size: Size {
                width: 1.0,
                height: 1.0,
            },
            weight: "1kg".to_string(),
            comments: vec![],
        }
    }

    #[tokio::test]
    async fn test_pending_is_applied_before_the_request() {
        let (handle, mut receiver) = create_mock_handle::<ProductReducer>(10);
        let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Apple")], vec![]));
        let client = ProductClient::new(handle, api.clone());

        let task = tokio::spawn(async move { client.fetch_all().await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Pending dispatch");
        assert_eq!(action, ProductAction::FetchAll(RequestId(1), Phase::Pending));
        assert!(api.calls().is_empty());
        responder.send(Ok(())).unwrap();

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Fulfilled dispatch");
        assert_eq!(
            action,
            ProductAction::FetchAll(RequestId(1), Phase::Fulfilled(vec![product(1, "Apple")]))
        );
        responder.send(Ok(())).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 1);
        assert_eq!(api.calls(), vec![Operation::FetchProducts]);
    }

    #[tokio::test]
    async fn test_add_returns_server_product() {
        let mut mock = MockStore::<ProductReducer>::new();
        mock.expect_dispatch().ack();
        mock.expect_dispatch().ack();

        let client = ProductClient::new(mock.handle(), Arc::new(FakeCatalogApi::default()));
        let added = client.add(draft("Pear")).await.unwrap();
        assert_eq!(added.id, ProductId(1));

        let dispatched = mock.take_dispatched();
        assert!(matches!(dispatched[0], ProductAction::Add(_, Phase::Pending)));
        assert!(matches!(&dispatched[1], ProductAction::Add(_, Phase::Fulfilled(p)) if p.name == "Pear"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_returned() {
        let mut mock = MockStore::<ProductReducer>::new();
        mock.expect_dispatch().ack();
        mock.expect_dispatch().ack();

        let api = Arc::new(FakeCatalogApi::default());
        api.fail_next(ApiError::application(
            Operation::DeleteProduct,
            500,
            Some("boom".to_string()),
        ));
        let client = ProductClient::new(mock.handle(), api);

        let err = client.delete(ProductId(7)).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(matches!(err, ProductStoreError::Api(_)));

        let dispatched = mock.take_dispatched();
        assert_eq!(
            dispatched[1],
            ProductAction::Delete(RequestId(1), Phase::Rejected("boom".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_store_skips_the_request() {
        let mut mock = MockStore::<ProductReducer>::new();
        mock.expect_dispatch().return_err(FrameworkError::StoreClosed);

        let api = Arc::new(FakeCatalogApi::default());
        let client = ProductClient::new(mock.handle(), api.clone());

        let err = client.edit(product(1, "Apple")).await.unwrap_err();
        assert!(matches!(err, ProductStoreError::StoreCommunication(_)));
        assert!(api.calls().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_set_editing_target_dispatches_once() {
        let mut mock = MockStore::<ProductReducer>::new();
        mock.expect_dispatch().ack();

        let client = ProductClient::new(mock.handle(), Arc::new(FakeCatalogApi::default()));
        client
            .set_editing_target(Some(product(4, "Kiwi")))
            .await
            .unwrap();

        assert_eq!(
            mock.take_dispatched(),
            vec![ProductAction::SetEditingTarget(Some(product(4, "Kiwi")))]
        );
    }
}
