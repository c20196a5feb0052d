//! # Comment Client
//!
//! Fetches comments into the comment store.
use crate::api::CatalogApi;
use crate::comment_store::{CommentAction, CommentReducer, CommentState, CommentStoreError};
use crate::model::Comment;
use async_trait::async_trait;
use std::sync::Arc;
use store_framework::{FrameworkError, Phase, StoreClient, StoreHandle};
use tracing::{debug, instrument, warn};

/// Client for the comment store.
#[derive(Clone)]
pub struct CommentClient {
    inner: StoreHandle<CommentReducer>,
    api: Arc<dyn CatalogApi>,
}

#[async_trait]
impl StoreClient<CommentReducer> for CommentClient {
    type Error = CommentStoreError;

    fn inner(&self) -> &StoreHandle<CommentReducer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CommentStoreError::StoreCommunication(e.to_string())
    }
}

impl CommentClient {
    pub fn new(inner: StoreHandle<CommentReducer>, api: Arc<dyn CatalogApi>) -> Self {
        Self { inner, api }
    }

    /// The most recently published state.
    pub fn state(&self) -> CommentState {
        self.inner.subscribe().borrow().clone()
    }

    /// Fetches every comment and replaces the local items.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Comment>, CommentStoreError> {
        let request = self.inner.next_request();
        self.inner
            .dispatch(CommentAction::FetchAll(request, Phase::Pending))
            .await
            .map_err(Self::map_error)?;

        debug!(%request, "Sending request");
        let result = self.api.list_comments().await;
        if let Err(e) = &result {
            warn!(error = %e, "Request failed");
        }

        self.inner
            .dispatch(CommentAction::FetchAll(request, Phase::settle(result.clone())))
            .await
            .map_err(Self::map_error)?;
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, FakeCatalogApi, Operation};
    use crate::model::{CommentId, ProductId};
    use store_framework::mock::MockStore;

    fn comment(id: u64) -> Comment {
        Comment {
            id: CommentId(id),
            product_id: ProductId(1),
            description: "Nice".to_string(),
            date: "2024-03-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_dispatches_both_phases() {
        let mut mock = MockStore::<CommentReducer>::new();
        mock.expect_dispatch().ack();
        mock.expect_dispatch().ack();

        let api = Arc::new(FakeCatalogApi::new(vec![], vec![comment(1), comment(2)]));
        let client = CommentClient::new(mock.handle(), api);

        let comments = client.fetch_all().await.unwrap();
        assert_eq!(comments.len(), 2);

        let dispatched = mock.take_dispatched();
        assert!(matches!(dispatched[0], CommentAction::FetchAll(_, Phase::Pending)));
        assert!(matches!(&dispatched[1], CommentAction::FetchAll(_, Phase::Fulfilled(c)) if c.len() == 2));
        mock.verify();
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let mut mock = MockStore::<CommentReducer>::new();
        mock.expect_dispatch().ack();
        mock.expect_dispatch().ack();

        let api = Arc::new(FakeCatalogApi::default());
        api.fail_next(ApiError::network(Operation::FetchComments, "refused"));
        let client = CommentClient::new(mock.handle(), api);

        let err = client.fetch_all().await.unwrap_err();
        assert_eq!(err.to_string(), "Network error during fetching comments");
        assert!(matches!(
            &mock.take_dispatched()[1],
            CommentAction::FetchAll(_, Phase::Rejected(msg)) if msg == "Network error during fetching comments"
        ));
    }

    #[tokio::test]
    async fn test_snapshot_maps_framework_errors() {
        let mut mock = MockStore::<CommentReducer>::new();
        mock.expect_snapshot().return_err(FrameworkError::StoreDropped);

        let client = CommentClient::new(mock.handle(), Arc::new(FakeCatalogApi::default()));
        let err = client.snapshot().await.unwrap_err();
        assert!(matches!(err, CommentStoreError::StoreCommunication(_)));
    }
}
