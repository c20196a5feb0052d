//! Pure data structures (DTOs) implementing the [`RemoteEntity`](store_framework::RemoteEntity) trait.

pub mod comment;
pub mod product;

pub use comment::*;
pub use product::*;
