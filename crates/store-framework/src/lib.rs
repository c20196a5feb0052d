//! # Store Framework
//!
//! This crate provides the building blocks for client-side state containers that mirror
//! remote REST resources. It combines a **resource-oriented** view of remote data (lists of
//! records with create, update, delete) with the **Actor Model** for owning state: each store
//! is a single Tokio task that applies actions one at a time through a pure reducer.
//!
//! ## Why Reducers + Actors?
//!
//! - **Reducers** keep the business logic pure: `(state, action) -> state`, trivially testable.
//! - **Actors** give every store exactly one owner, so transitions are totally ordered and no
//!   locks are needed.
//! - **Explicit phases** ([`Phase`]) model the lifecycle of each remote request (pending,
//!   fulfilled, rejected) as data instead of as naming conventions.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`RemoteEntity`]) - identity of mirrored records
//! 2. **State Layer** ([`ResourceState`], [`Reducer`]) - lifecycle transitions
//! 3. **Runtime Layer** ([`StoreActor`]) - sequential application of actions
//! 4. **Interface Layer** ([`StoreHandle`], [`StoreClient`]) - type-safe dispatch and reads
//!
//! ## Example
//!
//! ```rust
//! use store_framework::{Phase, Reducer, RemoteEntity, RequestId, ResourceState, StoreActor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: u32, label: String }
//!
//! impl RemoteEntity for Tag {
//!     type Id = u32;
//!     type Draft = String;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[derive(Debug)]
//! enum TagAction { FetchAll(RequestId, Phase<Vec<Tag>>) }
//!
//! #[derive(Debug)]
//! struct TagReducer;
//!
//! impl Reducer for TagReducer {
//!     const NAME: &'static str = "tags";
//!     type State = ResourceState<Tag>;
//!     type Action = TagAction;
//!
//!     fn reduce(mut state: Self::State, action: TagAction) -> Self::State {
//!         match action {
//!             TagAction::FetchAll(request, phase) => state.apply_refresh(request, phase),
//!         }
//!         state
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = StoreActor::<TagReducer>::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let request = handle.next_request();
//!     handle.dispatch(TagAction::FetchAll(request, Phase::Pending)).await.unwrap();
//!     assert!(handle.snapshot().await.unwrap().loading);
//!
//!     let tags = vec![Tag { id: 1, label: "new".into() }];
//!     handle.dispatch(TagAction::FetchAll(request, Phase::Fulfilled(tags))).await.unwrap();
//!     let state = handle.snapshot().await.unwrap();
//!     assert!(!state.loading);
//!     assert_eq!(state.items.len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Actions are applied **sequentially** within a store
//! - Network calls run in the callers' tasks; their outcomes arrive as actions
//! - Refresh responses are fenced by [`RequestId`], so an outdated response never overwrites
//!   a newer one
//!
//! ## Testing
//!
//! See the [`mock`] module for handles that let a test play the store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod phase;
pub mod reducer;
pub mod state;

pub use actor::StoreActor;
pub use client::StoreHandle;
pub use client_trait::StoreClient;
pub use entity::RemoteEntity;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use phase::{Phase, RequestId};
pub use reducer::Reducer;
pub use state::ResourceState;
