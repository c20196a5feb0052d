//! State transitions of the product store.

use super::ProductAction;
use crate::model::{Product, ProductId};
use store_framework::{Reducer, ResourceState};
use tracing::debug;

/// Everything the product store holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    pub products: ResourceState<Product>,
    /// The product the edit form was opened for, if any.
    pub editing_target: Option<Product>,
}

impl ProductState {
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.find(&id)
    }
}

#[derive(Debug)]
pub struct ProductReducer;

impl Reducer for ProductReducer {
    const NAME: &'static str = "products";
    type State = ProductState;
    type Action = ProductAction;

    fn reduce(mut state: ProductState, action: ProductAction) -> ProductState {
        match action {
            ProductAction::FetchAll(request, phase) => state.products.apply_refresh(request, phase),
            ProductAction::Add(request, phase) => {
                debug!(%request, phase = phase.label(), "Applying add");
                state.products.apply_create(phase)
            }
            ProductAction::Edit(request, phase) => {
                debug!(%request, phase = phase.label(), "Applying edit");
                state.products.apply_update(phase)
            }
            ProductAction::Delete(request, phase) => {
                debug!(%request, phase = phase.label(), "Applying delete");
                state.products.apply_delete(phase)
            }
            ProductAction::SetEditingTarget(target) => state.editing_target = target,
        }
        state
    }

    fn item_count(state: &ProductState) -> usize {
        state.products.items.len()
    }
}
