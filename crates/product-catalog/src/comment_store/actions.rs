//! Actions of the comment store.

use crate::model::Comment;
use store_framework::{Phase, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum CommentAction {
    /// Full collection fetch. Responses older than the latest fetch are ignored.
    FetchAll(RequestId, Phase<Vec<Comment>>),
}
