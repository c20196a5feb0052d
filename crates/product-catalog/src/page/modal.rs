//! Which modal the list page shows.

use crate::model::ProductId;

/// What the product form is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { product_id: ProductId },
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add New Product",
            FormMode::Edit { .. } => "Edit Product",
        }
    }
}

/// The modal state of the list page. At most one modal is open, except for a delete
/// confirmation stacked over the details of the same product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Details {
        product_id: ProductId,
    },
    ConfirmDelete {
        product_id: ProductId,
        /// The details modal of `product_id` is open underneath.
        over_details: bool,
    },
    Form(FormMode),
}

impl Modal {
    /// The product whose details are visible, including under a stacked confirmation.
    pub fn details_product(self) -> Option<ProductId> {
        match self {
            Modal::Details { product_id }
            | Modal::ConfirmDelete {
                product_id,
                over_details: true,
            } => Some(product_id),
            _ => None,
        }
    }

    /// The product waiting for delete confirmation.
    pub fn pending_delete(self) -> Option<ProductId> {
        match self {
            Modal::ConfirmDelete { product_id, .. } => Some(product_id),
            _ => None,
        }
    }

    pub fn form_mode(self) -> Option<FormMode> {
        match self {
            Modal::Form(mode) => Some(mode),
            _ => None,
        }
    }

    /// Opens a delete confirmation, stacked when the details of `product_id` are open.
    pub fn request_delete(self, product_id: ProductId) -> Modal {
        let over_details = self.details_product() == Some(product_id);
        Modal::ConfirmDelete {
            product_id,
            over_details,
        }
    }

    /// Closes only the confirmation.
    pub fn cancel_delete(self) -> Modal {
        match self {
            Modal::ConfirmDelete {
                product_id,
                over_details: true,
            } => Modal::Details { product_id },
            Modal::ConfirmDelete { .. } => Modal::Closed,
            other => other,
        }
    }
}
