//! Error types for the catalog HTTP API.

use thiserror::Error;

/// The remote operation a request belongs to. Used to word error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchProducts,
    AddProduct,
    EditProduct,
    DeleteProduct,
    FetchComments,
}

impl Operation {
    /// "fetching products", "adding product", ...
    pub fn gerund(self) -> &'static str {
        match self {
            Operation::FetchProducts => "fetching products",
            Operation::AddProduct => "adding product",
            Operation::EditProduct => "editing product",
            Operation::DeleteProduct => "deleting product",
            Operation::FetchComments => "fetching comments",
        }
    }

    /// "fetch products", "add product", ...
    pub fn verb_phrase(self) -> &'static str {
        match self {
            Operation::FetchProducts => "fetch products",
            Operation::AddProduct => "add product",
            Operation::EditProduct => "edit product",
            Operation::DeleteProduct => "delete product",
            Operation::FetchComments => "fetch comments",
        }
    }
}

/// Failures of a catalog request.
///
/// The `Display` text is what ends up in a store's `error` field and on the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No usable response: connection refused, timeout, or a body that could not be decoded.
    #[error("Network error during {}", .operation.gerund())]
    Network { operation: Operation, detail: String },

    /// The server answered with a non-success status.
    #[error("{}", application_message(.operation, .message))]
    Application {
        operation: Operation,
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    pub fn network(operation: Operation, detail: impl Into<String>) -> Self {
        ApiError::Network {
            operation,
            detail: detail.into(),
        }
    }

    pub fn application(operation: Operation, status: u16, message: Option<String>) -> Self {
        ApiError::Application {
            operation,
            status,
            message,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Network { operation, .. } | ApiError::Application { operation, .. } => {
                *operation
            }
        }
    }
}

fn application_message(operation: &Operation, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Failed to {}", operation.verb_phrase()),
    }
}
