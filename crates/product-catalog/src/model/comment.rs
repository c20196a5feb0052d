use serde::{Deserialize, Serialize};
use std::fmt::Display;
use store_framework::RemoteEntity;

use super::ProductId;

/// Type-safe identifier for Comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment left on a product. Read-only: comments are only ever fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub product_id: ProductId,
    pub description: String,
    pub date: String,
}

impl RemoteEntity for Comment {
    type Id = CommentId;
    // Comments are never created from this client.
    type Draft = ();

    fn id(&self) -> CommentId {
        self.id
    }
}
