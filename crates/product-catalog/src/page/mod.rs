//! # List Page
//!
//! [`ListPage`] is the controller behind the product list: it owns the transient UI state
//! (open [`Modal`], working [`ProductForm`], [`SortOrder`]) and turns user events into store
//! operations. Rendering is left to the caller, which reads the view models.
//!
//! ## Flows
//!
//! | event | effect |
//! |-------|--------|
//! | mount | fetch products and comments concurrently |
//! | card click | details modal |
//! | add / edit | form modal, edit pre-filled from the store |
//! | submit | validate, then exactly one `add` or `edit`; the form closes whatever the outcome |
//! | delete | confirmation, stacked over details when they show the same product |
//!
//! ```rust
//! use product_catalog::api::FakeCatalogApi;
//! use product_catalog::lifecycle::CatalogSystem;
//! use product_catalog::page::ListPage;
//! use product_catalog::validation::Field;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = CatalogSystem::with_api(Arc::new(FakeCatalogApi::default()), 8);
//!     let mut page = ListPage::new(system.product_client.clone(), system.comment_client.clone());
//!     page.mount().await?;
//!
//!     page.open_add_form().await?;
//!     for (field, value) in [
//!         (Field::Name, "Desk"),
//!         (Field::ImageUrl, "https://img.example/desk.png"),
//!         (Field::Count, "2"),
//!         (Field::Weight, "20kg"),
//!         (Field::Width, "120"),
//!         (Field::Height, "75"),
//!     ] {
//!         page.update_field(field, value)?;
//!     }
//!     page.submit_form().await?;
//!
//!     assert_eq!(page.list_view().cards.len(), 1);
//!     drop(page);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod modal;

pub use error::*;
pub use modal::*;

use crate::clients::{CommentClient, ProductClient};
use crate::model::{Product, ProductId};
use crate::sort::SortOrder;
use crate::validation::{Field, FieldErrors, ProductForm};
use crate::view::{DetailsView, FormView, ListView};
use tracing::{debug, info, instrument};

/// Controller of the product list page.
pub struct ListPage {
    products: ProductClient,
    comments: CommentClient,
    modal: Modal,
    form: ProductForm,
    errors: FieldErrors,
    sort_order: SortOrder,
}

impl ListPage {
    pub fn new(products: ProductClient, comments: CommentClient) -> Self {
        Self {
            products,
            comments,
            modal: Modal::Closed,
            form: ProductForm::default(),
            errors: FieldErrors::new(),
            sort_order: SortOrder::default(),
        }
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Fetches products and comments concurrently.
    ///
    /// Both fetches always complete; the first failure is returned after both have been
    /// recorded on their stores.
    #[instrument(skip(self))]
    pub async fn mount(&self) -> Result<(), PageError> {
        info!("Mounting list page");
        let (products, comments) =
            tokio::join!(self.products.fetch_all(), self.comments.fetch_all());
        products?;
        comments?;
        Ok(())
    }

    /// Shows the details of `product_id`, closing an open form first.
    #[instrument(skip(self))]
    pub async fn open_details(&mut self, product_id: ProductId) -> Result<(), PageError> {
        self.close_form().await?;
        debug!(%product_id, "Opening details");
        self.modal = Modal::Details { product_id };
        Ok(())
    }

    /// Closes the details modal (close button or outside click).
    pub fn close_details(&mut self) {
        if let Modal::Details { .. } = self.modal {
            self.modal = Modal::Closed;
        }
    }

    #[instrument(skip(self))]
    pub async fn open_add_form(&mut self) -> Result<(), PageError> {
        self.products.set_editing_target(None).await?;
        self.reset_form(ProductForm::default());
        self.modal = Modal::Form(FormMode::Add);
        Ok(())
    }

    /// Opens the form pre-filled with the stored values of `product_id`.
    #[instrument(skip(self))]
    pub async fn open_edit_form(&mut self, product_id: ProductId) -> Result<(), PageError> {
        let product = self
            .products
            .state()
            .find(product_id)
            .cloned()
            .ok_or(PageError::UnknownProduct(product_id))?;

        self.reset_form(ProductForm::from_product(&product));
        self.products.set_editing_target(Some(product)).await?;
        self.modal = Modal::Form(FormMode::Edit { product_id });
        Ok(())
    }

    /// Changes one input of the open form and returns the resulting validation errors.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<FieldErrors, PageError> {
        if self.modal.form_mode().is_none() {
            return Err(PageError::NoActiveForm);
        }
        self.form.set(field, value);
        self.errors = self.form.validate();
        Ok(self.errors.clone())
    }

    /// Validates and sends the open form.
    ///
    /// An invalid form stays open and nothing is sent. Otherwise exactly one store operation
    /// runs and the form closes whether or not it succeeds.
    #[instrument(skip(self))]
    pub async fn submit_form(&mut self) -> Result<Product, PageError> {
        let mode = self.modal.form_mode().ok_or(PageError::NoActiveForm)?;

        let result = match mode {
            FormMode::Add => match self.form.to_draft(Vec::new()) {
                Ok(draft) => self.products.add(draft).await.map_err(PageError::from),
                Err(errors) => return Err(self.reject(errors)),
            },
            FormMode::Edit { product_id } => {
                let comments = self
                    .products
                    .state()
                    .editing_target
                    .filter(|target| target.id == product_id)
                    .map(|target| target.comments)
                    .unwrap_or_default();
                match self.form.to_draft(comments) {
                    Ok(draft) => self
                        .products
                        .edit(Product::from_draft(product_id, draft))
                        .await
                        .map_err(PageError::from),
                    Err(errors) => return Err(self.reject(errors)),
                }
            }
        };

        self.modal = Modal::Closed;
        self.reset_form(ProductForm::default());
        let cleared = self.products.set_editing_target(None).await;
        let product = result?;
        cleared?;
        info!(id = %product.id, "Product saved");
        Ok(product)
    }

    /// Closes the form without sending anything.
    #[instrument(skip(self))]
    pub async fn cancel_form(&mut self) -> Result<(), PageError> {
        if self.modal.form_mode().is_some() {
            self.modal = Modal::Closed;
        }
        self.reset_form(ProductForm::default());
        self.products.set_editing_target(None).await?;
        Ok(())
    }

    /// Asks for confirmation before deleting `product_id`. An open form is closed first.
    #[instrument(skip(self))]
    pub async fn request_delete(&mut self, product_id: ProductId) -> Result<(), PageError> {
        self.close_form().await?;
        self.modal = self.modal.request_delete(product_id);
        Ok(())
    }

    /// Deletes the product waiting for confirmation and closes the confirmation along with
    /// any details underneath.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> Result<ProductId, PageError> {
        let product_id = self
            .modal
            .pending_delete()
            .ok_or(PageError::NoPendingDelete)?;
        self.modal = Modal::Closed;
        let deleted = self.products.delete(product_id).await?;
        info!(id = %deleted, "Product deleted");
        Ok(deleted)
    }

    /// Closes only the confirmation.
    pub fn cancel_delete(&mut self) -> Result<(), PageError> {
        if self.modal.pending_delete().is_none() {
            return Err(PageError::NoPendingDelete);
        }
        self.modal = self.modal.cancel_delete();
        Ok(())
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn list_view(&self) -> ListView {
        ListView::build(&self.products.state().products, self.sort_order)
    }

    /// The details modal, if open and the product still exists.
    pub fn details_view(&self) -> Option<DetailsView> {
        let product_id = self.modal.details_product()?;
        let comments = self.comments.state().comments.items;
        DetailsView::build(&self.products.state().products, &comments, product_id)
    }

    pub fn form_view(&self) -> Option<FormView> {
        let mode = self.modal.form_mode()?;
        Some(FormView::new(mode, self.form.clone(), self.errors.clone()))
    }

    /// Drops the open form, if any, along with the store's edit target.
    async fn close_form(&mut self) -> Result<(), PageError> {
        if self.modal.form_mode().is_none() {
            return Ok(());
        }
        debug!("Closing form");
        self.modal = Modal::Closed;
        self.reset_form(ProductForm::default());
        self.products.set_editing_target(None).await?;
        Ok(())
    }

    fn reset_form(&mut self, form: ProductForm) {
        self.form = form;
        self.errors.clear();
    }

    fn reject(&mut self, errors: FieldErrors) -> PageError {
        debug!(invalid = errors.len(), "Form rejected");
        self.errors = errors.clone();
        PageError::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FakeCatalogApi;
    use crate::{comment_store, product_store};
    use std::sync::Arc;

    fn page() -> ListPage {
        let api: Arc<FakeCatalogApi> = Arc::new(FakeCatalogApi::default());
        let (product_actor, product_handle) = product_store::new(8);
        let (comment_actor, comment_handle) = comment_store::new(8);
        tokio::spawn(product_actor.run());
        tokio::spawn(comment_actor.run());
        ListPage::new(
            ProductClient::new(product_handle, api.clone()),
            CommentClient::new(comment_handle, api),
        )
    }

    #[tokio::test]
    async fn test_update_field_requires_open_form() {
        let mut page = page();
        assert_eq!(
            page.update_field(Field::Name, "x"),
            Err(PageError::NoActiveForm)
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_form_open() {
        let mut page = page();
        page.open_add_form().await.unwrap();
        page.update_field(Field::Name, "Desk").unwrap();

        let err = page.submit_form().await.unwrap_err();
        assert!(matches!(&err, PageError::Invalid(errors) if errors.len() == 5));
        assert_eq!(page.modal(), Modal::Form(FormMode::Add));
        assert_eq!(page.form_view().unwrap().errors.len(), 5);
        assert!(page.list_view().cards.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_edit_target_opens_nothing() {
        let mut page = page();
        let err = page.open_edit_form(ProductId(99)).await.unwrap_err();
        assert_eq!(err, PageError::UnknownProduct(ProductId(99)));
        assert_eq!(page.modal(), Modal::Closed);
    }

    #[tokio::test]
    async fn test_cancel_delete_without_confirmation() {
        let mut page = page();
        assert_eq!(page.cancel_delete(), Err(PageError::NoPendingDelete));
        assert!(matches!(
            page.confirm_delete().await,
            Err(PageError::NoPendingDelete)
        ));
    }
}
