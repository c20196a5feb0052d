//! # Mock Stores & Testing Guide
//!
//! Domain clients (e.g. a product client) wrap a [`StoreHandle`] and drive it through the
//! request lifecycle: dispatch `Pending`, call the network, dispatch the outcome. To test that
//! choreography you don't need a running [`StoreActor`](crate::StoreActor): a mock handle lets
//! the test see every action the client sends and decide how the "store" answers.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | Mock handle | Real store |
//! |---------|-------------|------------|
//! | **Determinism** | Test answers each request | Reducer answers |
//! | **State** | None (expectations) | Real reducer state |
//! | **Use Case** | Asserting the actions a client sends | Testing reducers and full flows |
//! | **Error Injection** | Easy (`return_err`) | Close the store |
//!
//! ## Two Styles
//!
//! 1. **Step by step** – [`create_mock_handle`] returns the handle and the raw receiver;
//!    [`expect_dispatch`] / [`expect_get_state`] pop the next request so the test can
//!    inspect it and reply through the responder.
//! 2. **Fluent** – [`MockStore`] answers requests from a queue of expectations and records
//!    every dispatched action for later assertions.
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::{FrameworkError, Reducer};
//!
//! #[derive(Debug)]
//! struct Counter;
//!
//! impl Reducer for Counter {
//!     const NAME: &'static str = "counter";
//!     type State = u32;
//!     type Action = u32;
//!     fn reduce(state: u32, action: u32) -> u32 { state + action }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Counter>::new();
//!     mock.expect_dispatch().ack();
//!     mock.expect_snapshot().return_err(FrameworkError::StoreClosed);
//!
//!     let handle = mock.handle();
//!     handle.dispatch(4).await.unwrap();
//!     assert!(matches!(handle.snapshot().await, Err(FrameworkError::StoreClosed)));
//!
//!     assert_eq!(mock.take_dispatched(), vec![4]);
//!     mock.verify();
//! }
//! ```

use crate::client::StoreHandle;
use crate::error::FrameworkError;
use crate::message::{Response, StoreRequest};
use crate::reducer::Reducer;
use std::collections::VecDeque;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer the mock gives to it.
enum Expectation<R: Reducer> {
    Dispatch {
        response: Result<(), FrameworkError>,
    },
    GetState {
        response: Result<R::State, FrameworkError>,
    },
}

type Expectations<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<R: Reducer> {
    handle: StoreHandle<R>,
    expectations: Expectations<R>,
    dispatched: Arc<Mutex<Vec<R::Action>>>,
    _task: tokio::task::JoinHandle<()>,
}

impl<R: Reducer> Default for MockStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> MockStore<R> {
    /// Creates a mock store with no expectations.
    pub fn new() -> Self {
        let (handle, mut receiver) = create_mock_handle::<R>(100);
        let expectations: Expectations<R> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let pending = expectations.clone();
        let recorded = dispatched.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = pending.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        recorded.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::GetState { respond_to },
                        Some(Expectation::GetState { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            handle,
            expectations,
            dispatched,
            _task: task,
        }
    }

    /// Returns a handle for the code under test.
    pub fn handle(&self) -> StoreHandle<R> {
        self.handle.clone()
    }

    /// Expects a `dispatch`.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<R> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot`.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<R> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, in dispatch order.
    pub fn take_dispatched(&self) -> Vec<R::Action> {
        std::mem::take(&mut *self.dispatched.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<R: Reducer> {
    expectations: Expectations<R>,
}

impl<R: Reducer> DispatchExpectationBuilder<R> {
    /// Acknowledges the dispatch.
    pub fn ack(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Dispatch { response: Ok(()) });
    }

    /// Fails the dispatch.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Dispatch {
                response: Err(error),
            });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<R: Reducer> {
    expectations: Expectations<R>,
}

impl<R: Reducer> SnapshotExpectationBuilder<R> {
    /// Answers with the given state.
    pub fn return_ok(self, state: R::State) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::GetState {
                response: Ok(state),
            });
    }

    /// Fails the snapshot.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::GetState {
                response: Err(error),
            });
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a handle whose requests arrive on the returned receiver.
///
/// No actor runs behind the handle: the test plays the store by reading requests from the
/// receiver and answering through their responders.
pub fn create_mock_handle<R: Reducer>(
    buffer_size: usize,
) -> (StoreHandle<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(R::State::default());
    let handle = StoreHandle::new(sender, watcher, Arc::new(AtomicU64::new(1)));
    (handle, receiver)
}

/// Waits for the next request and returns it if it is a dispatch.
pub async fn expect_dispatch<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Action, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a state read.
pub async fn expect_get_state<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<Response<R::State>> {
    match receiver.recv().await {
        Some(StoreRequest::GetState { respond_to }) => Some(respond_to),
        _ => None,
    }
}
