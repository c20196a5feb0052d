//! # StoreClient Trait
//!
//! Provides a common interface for domain-specific store clients, adding default `snapshot`
//! and `subscribe` methods built on top of a generic [`StoreHandle`].
use crate::{FrameworkError, Reducer, StoreHandle};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients that wrap a [`StoreHandle`].
///
/// # Example
///
/// ```rust
/// use store_framework::{FrameworkError, Reducer, StoreActor, StoreClient, StoreHandle};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct Tally;
///
/// impl Reducer for Tally {
///     const NAME: &'static str = "tally";
///     type State = Vec<String>;
///     type Action = String;
///     fn reduce(mut state: Vec<String>, action: String) -> Vec<String> {
///         state.push(action);
///         state
///     }
/// }
///
/// #[derive(Debug)]
/// struct TallyError(String);
///
/// struct TallyClient {
///     inner: StoreHandle<Tally>,
/// }
///
/// #[async_trait]
/// impl StoreClient<Tally> for TallyClient {
///     type Error = TallyError;
///
///     fn inner(&self) -> &StoreHandle<Tally> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TallyError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = StoreActor::<Tally>::new(4);
///     tokio::spawn(actor.run());
///     let client = TallyClient { inner };
///     client.inner().dispatch("one".into()).await.unwrap();
///     // snapshot() is provided automatically
///     assert_eq!(client.snapshot().await.unwrap(), vec!["one".to_string()]);
/// }
/// ```
#[async_trait]
pub trait StoreClient<R: Reducer>: Send + Sync {
    /// The client-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic handle.
    fn inner(&self) -> &StoreHandle<R>;

    /// Map framework errors to the client error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the current state of the store.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<R::State, Self::Error> {
        tracing::trace!("Reading snapshot");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Watch the state of the store.
    fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner().subscribe()
    }
}
