//! View models of the list page.
//!
//! Plain data rebuilt from store state and page state; a renderer only has to print them.

use crate::model::{Comment, Product, ProductId};
use crate::page::FormMode;
use crate::sort::{sort_products, SortOrder};
use crate::validation::{FieldErrors, ProductForm};
use store_framework::ResourceState;

pub const LIST_TITLE: &str = "Product List";
pub const LOADING_TEXT: &str = "Loading products...";
pub const NO_PRODUCTS_TEXT: &str = "No products found";
pub const NO_COMMENTS_TEXT: &str = "No comments for this product.";

/// One tile of the product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
}

impl From<&Product> for CardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Ready,
}

impl ListStatus {
    /// The status line shown above the grid, if any.
    pub fn text(&self) -> Option<String> {
        match self {
            ListStatus::Loading => Some(LOADING_TEXT.to_string()),
            ListStatus::Failed(message) => Some(format!("Error: {message}")),
            ListStatus::Ready => None,
        }
    }
}

/// The product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub title: &'static str,
    pub status: ListStatus,
    /// Cards in the current sort order.
    pub cards: Vec<CardView>,
    /// Shown instead of the grid when there are no cards.
    pub empty_message: Option<&'static str>,
}

impl ListView {
    pub fn build(products: &ResourceState<Product>, order: SortOrder) -> Self {
        let status = if products.loading {
            ListStatus::Loading
        } else if let Some(message) = &products.error {
            ListStatus::Failed(message.clone())
        } else {
            ListStatus::Ready
        };
        let cards: Vec<CardView> = sort_products(&products.items, order)
            .into_iter()
            .map(CardView::from)
            .collect();
        let empty_message = cards.is_empty().then_some(NO_PRODUCTS_TEXT);

        Self {
            title: LIST_TITLE,
            status,
            cards,
            empty_message,
        }
    }
}

/// The details modal of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub product: Product,
    /// "{width}x{height}"
    pub size_label: String,
    pub comments: Vec<Comment>,
    pub empty_comments_message: Option<&'static str>,
}

impl DetailsView {
    /// Returns `None` when the product is not in the store.
    pub fn build(
        products: &ResourceState<Product>,
        comments: &[Comment],
        id: ProductId,
    ) -> Option<Self> {
        let product = products.find(&id)?.clone();
        let comments: Vec<Comment> = comments_for(comments, id).into_iter().cloned().collect();
        Some(Self {
            size_label: format!("{}x{}", product.size.width, product.size.height),
            empty_comments_message: comments.is_empty().then_some(NO_COMMENTS_TEXT),
            product,
            comments,
        })
    }
}

/// The add/edit form modal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub mode: FormMode,
    pub values: ProductForm,
    pub errors: FieldErrors,
}

impl FormView {
    pub fn new(mode: FormMode, values: ProductForm, errors: FieldErrors) -> Self {
        Self {
            title: mode.title(),
            mode,
            values,
            errors,
        }
    }
}

/// Comments of one product, in fetch order.
pub fn comments_for(comments: &[Comment], product_id: ProductId) -> Vec<&Comment> {
    comments
        .iter()
        .filter(|comment| comment.product_id == product_id)
        .collect()
}
