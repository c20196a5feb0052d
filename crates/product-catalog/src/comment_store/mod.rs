//! # Comment Store
//!
//! The local mirror of all comments. Comments are only ever fetched; the per-product lists
//! are derived by [`comments_for`](crate::view::comments_for).

pub mod actions;
pub mod error;
pub mod reducer;

pub use actions::*;
pub use error::*;
pub use reducer::*;

use store_framework::{StoreActor, StoreHandle};

/// Creates a new comment store actor and its handle.
pub fn new(buffer_size: usize) -> (StoreActor<CommentReducer>, StoreHandle<CommentReducer>) {
    StoreActor::new(buffer_size)
}
