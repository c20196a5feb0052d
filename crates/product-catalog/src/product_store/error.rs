//! Error types for the product store.

use crate::api::ApiError;
use thiserror::Error;

/// Errors returned by product store operations.
///
/// The message of a failed request is also recorded on the store's `error` field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductStoreError {
    /// The catalog API rejected the request or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}
