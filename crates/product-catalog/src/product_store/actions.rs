//! Actions of the product store.
//!
//! Remote operations carry a [`Phase`]; a [`ProductClient`](crate::clients::ProductClient)
//! dispatches each operation twice, once `Pending` and once settled.

use crate::model::{Product, ProductId};
use store_framework::{Phase, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Full collection fetch. Responses older than the latest fetch are ignored.
    FetchAll(RequestId, Phase<Vec<Product>>),
    /// Create; the fulfilled product is appended.
    Add(RequestId, Phase<Product>),
    /// Full replacement by id.
    Edit(RequestId, Phase<Product>),
    /// Removal by id.
    Delete(RequestId, Phase<ProductId>),
    /// Local only: the product the edit form works on.
    SetEditingTarget(Option<Product>),
}
