//! Error types for the comment store.

use crate::api::ApiError;
use thiserror::Error;

/// Errors returned by comment store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentStoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}
