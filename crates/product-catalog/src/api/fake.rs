//! In-memory [`CatalogApi`] for tests and offline runs.
//!
//! Behaves like a small REST server: ids are assigned on create, edits of unknown ids answer
//! 404, and every call is recorded. Failures can be injected per operation with
//! [`FakeCatalogApi::fail_next`].

use super::{ApiError, CatalogApi, Operation};
use crate::model::{Comment, Product, ProductDraft, ProductId};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    comments: Vec<Comment>,
    failures: Vec<ApiError>,
    calls: Vec<Operation>,
}

/// An in-memory catalog server.
#[derive(Default)]
pub struct FakeCatalogApi {
    state: Mutex<FakeState>,
}

impl FakeCatalogApi {
    pub fn new(products: Vec<Product>, comments: Vec<Comment>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                products,
                comments,
                ..FakeState::default()
            }),
        }
    }

    /// Makes the next call of `error.operation()` fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.lock().failures.push(error);
    }

    /// Operations called so far, in call order.
    pub fn calls(&self) -> Vec<Operation> {
        self.lock().calls.clone()
    }

    /// Products currently held by the fake server.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records the call and pops an injected failure for it, if any.
    fn begin(&self, operation: Operation) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.lock();
        state.calls.push(operation);
        if let Some(index) = state
            .failures
            .iter()
            .position(|e| e.operation() == operation)
        {
            let error = state.failures.remove(index);
            debug!(?operation, %error, "Injected failure");
            return Err(error);
        }
        Ok(state)
    }
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let state = self.begin(Operation::FetchProducts)?;
        Ok(state.products.clone())
    }

    async fn add_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let mut state = self.begin(Operation::AddProduct)?;
        let next = state.products.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let product = Product::from_draft(ProductId(next), draft.clone());
        state.products.push(product.clone());
        Ok(product)
    }

    async fn edit_product(&self, product: &Product) -> Result<Product, ApiError> {
        let mut state = self.begin(Operation::EditProduct)?;
        match state.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product.clone())
            }
            None => Err(ApiError::application(Operation::EditProduct, 404, None)),
        }
    }

    async fn delete_product(&self, id: ProductId) -> Result<ProductId, ApiError> {
        let mut state = self.begin(Operation::DeleteProduct)?;
        state.products.retain(|p| p.id != id);
        Ok(id)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let state = self.begin(Operation::FetchComments)?;
        Ok(state.comments.clone())
    }
}
