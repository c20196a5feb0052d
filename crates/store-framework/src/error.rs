//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, independent of any domain.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
