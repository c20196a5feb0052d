//! # Store Messages
//!
//! The message types exchanged between a [`StoreHandle`](crate::StoreHandle) and its
//! [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::reducer::Reducer;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store actor.
///
/// - **Dispatch**: apply one action through the reducer. The response fires after the new
///   state has been stored and published, so the caller can rely on ordering.
/// - **GetState**: read a snapshot of the current state.
#[derive(Debug)]
pub enum StoreRequest<R: Reducer> {
    Dispatch {
        action: R::Action,
        respond_to: Response<()>,
    },
    GetState {
        respond_to: Response<R::State>,
    },
}
