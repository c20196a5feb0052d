//! Error types for the list page.

use crate::comment_store::CommentStoreError;
use crate::model::ProductId;
use crate::product_store::ProductStoreError;
use crate::validation::FieldErrors;
use thiserror::Error;

/// Errors returned by [`ListPage`](super::ListPage) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PageError {
    /// The form has failing fields; nothing was sent.
    #[error("{} form field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("No product form is open")]
    NoActiveForm,

    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    #[error("No delete is waiting for confirmation")]
    NoPendingDelete,

    #[error(transparent)]
    Products(#[from] ProductStoreError),

    #[error(transparent)]
    Comments(#[from] CommentStoreError),
}
