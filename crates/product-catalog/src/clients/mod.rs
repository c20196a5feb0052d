//! Type-safe wrappers around [`StoreHandle`](store_framework::StoreHandle).
//!
//! Each client pairs a store handle with the [`CatalogApi`](crate::api::CatalogApi) and runs
//! the request lifecycle: dispatch `Pending`, call the API, dispatch the settled phase.

pub mod comment_client;
pub mod product_client;

pub use comment_client::*;
pub use product_client::*;
