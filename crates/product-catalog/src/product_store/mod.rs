//! # Product Store
//!
//! The local mirror of the remote product collection, plus the product currently being
//! edited.
//!
//! ## Structure
//!
//! - [`actions`] - [`ProductAction`], one variant per lifecycle step of each operation
//! - [`reducer`] - [`ProductReducer`] and [`ProductState`]
//! - [`error`] - [`ProductStoreError`] returned by [`ProductClient`](crate::clients::ProductClient)
//! - [`new()`] - Factory function that creates the actor and its handle
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::api::FakeCatalogApi;
//! use product_catalog::clients::ProductClient;
//! use product_catalog::product_store;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, handle) = product_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let client = ProductClient::new(handle, Arc::new(FakeCatalogApi::default()));
//!     client.fetch_all().await?;
//!     assert!(client.state().products.items.is_empty());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod reducer;

pub use actions::*;
pub use error::*;
pub use reducer::*;

use store_framework::{StoreActor, StoreHandle};

/// Creates a new product store actor and its handle.
pub fn new(buffer_size: usize) -> (StoreActor<ProductReducer>, StoreHandle<ProductReducer>) {
    StoreActor::new(buffer_size)
}
