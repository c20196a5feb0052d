use serde::{Deserialize, Serialize};
use std::fmt::Display;
use store_framework::RemoteEntity;

use super::Comment;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical dimensions of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Represents a product in the catalog.
///
/// # Store Framework
/// This struct implements the [`RemoteEntity`](store_framework::RemoteEntity) trait,
/// allowing it to be mirrored by a [`ResourceState`](store_framework::ResourceState).
///
/// - Creation payload: [`ProductDraft`] (the server assigns the id)
/// - Updates are full replacements keyed by [`ProductId`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub count: u32,
    pub size: Size,
    /// Free text such as "200g"; sorting reads its leading number.
    pub weight: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Product {
    /// Builds the full product from a draft and the id the server assigned.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image_url: draft.image_url,
            count: draft.count,
            size: draft.size,
            weight: draft.weight,
            comments: draft.comments,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub image_url: String,
    pub count: u32,
    pub size: Size,
    pub weight: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl RemoteEntity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;

    fn id(&self) -> ProductId {
        self.id
    }
}
