//! # Reducer Trait
//!
//! A reducer is the business logic of a store: a pure function from the current state and one
//! action to the next state. It performs no I/O and knows nothing about channels, so it can be
//! unit-tested by folding a list of actions over `State::default()`.
//!
//! The [`StoreActor`](crate::StoreActor) owns the state and calls [`Reducer::reduce`] for every
//! dispatched action, one at a time.

use std::fmt::Debug;

/// Contract for the state transition function of one store.
///
/// Implementors are usually zero-sized marker types (`struct ProductReducer;`); the associated
/// types carry the real data.
pub trait Reducer: Send + Sync + 'static {
    /// Name used in log fields (e.g. `"products"`).
    const NAME: &'static str;

    /// The complete state of the store.
    type State: Clone + Default + Debug + Send + Sync + 'static;

    /// Everything that can happen to the state.
    type Action: Debug + Send + 'static;

    /// Computes the next state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;

    /// Number of items held by `state`, reported when the store shuts down.
    fn item_count(_state: &Self::State) -> usize {
        0
    }

    /// Folds a sequence of actions over the default state.
    fn replay(actions: impl IntoIterator<Item = Self::Action>) -> Self::State {
        actions
            .into_iter()
            .fold(Self::State::default(), |state, action| Self::reduce(state, action))
    }
}
