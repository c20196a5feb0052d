//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that owns the state of one store and
//! applies dispatched actions to it. It is the "Server" side of the store: a single Tokio task
//! receives requests over a channel and processes them one at a time.

use crate::client::StoreHandle;
use crate::message::StoreRequest;
use crate::reducer::Reducer;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The task that owns the state of one store.
///
/// # Concurrency Model
/// Every transition goes through the receive loop in [`StoreActor::run`], so the reducer
/// never runs concurrently with itself and the state needs no `Mutex`. Network calls happen
/// in the callers' tasks; the store only ever sees their outcomes as actions.
///
/// After each action the new state is published on a `watch` channel so that views can
/// re-render (see [`StoreHandle::subscribe`]).
///
/// # Usage Pattern
///
/// ```rust
/// use store_framework::{Reducer, StoreActor};
///
/// #[derive(Debug)]
/// struct Counter;
///
/// impl Reducer for Counter {
///     const NAME: &'static str = "counter";
///     type State = u32;
///     type Action = u32;
///
///     fn reduce(state: u32, action: u32) -> u32 {
///         state + action
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, handle) = StoreActor::<Counter>::new(8);
///     tokio::spawn(actor.run());
///
///     handle.dispatch(2).await.unwrap();
///     handle.dispatch(3).await.unwrap();
///     assert_eq!(handle.snapshot().await.unwrap(), 5);
/// }
/// ```
pub struct StoreActor<R: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    state: R::State,
    publisher: watch::Sender<R::State>,
}

impl<R: Reducer> StoreActor<R> {
    /// Creates a store starting from `R::State::default()`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. When full, dispatching waits.
    pub fn new(buffer_size: usize) -> (Self, StoreHandle<R>) {
        Self::with_state(buffer_size, R::State::default())
    }

    /// Creates a store starting from the given state.
    pub fn with_state(buffer_size: usize, state: R::State) -> (Self, StoreHandle<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        let handle = StoreHandle::new(sender, watcher, Arc::new(AtomicU64::new(1)));
        (actor, handle)
    }

    /// Runs the receive loop until every handle has been dropped.
    pub async fn run(mut self) {
        let store = R::NAME;
        info!(store, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(store, ?action, "Dispatch");
                    let current = std::mem::take(&mut self.state);
                    self.state = R::reduce(current, action);
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::GetState { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(store, items = R::item_count(&self.state), "Shutdown");
    }
}
