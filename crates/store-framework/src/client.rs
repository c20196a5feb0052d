//! # Store Handle
//!
//! The cloneable, type-safe interface to a running [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::phase::RequestId;
use crate::reducer::Reducer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreHandle
///
/// Forwards actions to the store actor and reads its state back.
///
/// * **Cloneable** – holds a sender, a watch receiver and a shared request counter.
/// * **Ordered** – `dispatch` resolves after the action has been applied.
/// * **Request ids** – [`StoreHandle::next_request`] hands out increasing ids shared by all
///   clones, used by reducers to fence outdated responses.
pub struct StoreHandle<R: Reducer> {
    sender: mpsc::Sender<StoreRequest<R>>,
    watcher: watch::Receiver<R::State>,
    requests: Arc<AtomicU64>,
}

impl<R: Reducer> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
            requests: Arc::clone(&self.requests),
        }
    }
}

impl<R: Reducer> StoreHandle<R> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<R>>,
        watcher: watch::Receiver<R::State>,
        requests: Arc<AtomicU64>,
    ) -> Self {
        Self {
            sender,
            watcher,
            requests,
        }
    }

    /// Allocates the id of a new request.
    pub fn next_request(&self) -> RequestId {
        RequestId(self.requests.fetch_add(1, Ordering::SeqCst))
    }

    /// Applies `action` and waits until the new state is in place.
    pub async fn dispatch(&self, action: R::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> Result<R::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetState { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Returns a receiver that is notified after every applied action.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.watcher.clone()
    }
}
