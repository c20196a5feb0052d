//! # Catalog API
//!
//! The HTTP resource client for the remote catalog. [`CatalogApi`] is the seam between the
//! stores and the network:
//!
//! | operation | method | path |
//! |-----------|--------|------|
//! | list products | GET | `/products` |
//! | add product | POST | `/products` |
//! | edit product | PUT | `/products/{id}` |
//! | delete product | DELETE | `/products/{id}` |
//! | list comments | GET | `/comments` |
//!
//! - [`HttpCatalogApi`] talks to a real server with `reqwest`.
//! - [`FakeCatalogApi`] keeps everything in memory, for tests and offline runs.

pub mod error;
pub mod fake;
pub mod http;

pub use error::*;
pub use fake::FakeCatalogApi;
pub use http::HttpCatalogApi;

use crate::model::{Comment, Product, ProductDraft, ProductId};
use async_trait::async_trait;

/// Remote operations on products and comments.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches the full product collection, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Creates a product; returns it with the id the server assigned.
    async fn add_product(&self, draft: &ProductDraft) -> Result<Product, ApiError>;

    /// Replaces the product with the same id; returns the stored version.
    async fn edit_product(&self, product: &Product) -> Result<Product, ApiError>;

    /// Removes a product; returns the id that was deleted.
    async fn delete_product(&self, id: ProductId) -> Result<ProductId, ApiError>;

    /// Fetches all comments across all products.
    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError>;
}
