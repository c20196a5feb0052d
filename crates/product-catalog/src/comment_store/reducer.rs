//! State transitions of the comment store.

use super::CommentAction;
use crate::model::Comment;
use store_framework::{Reducer, ResourceState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentState {
    pub comments: ResourceState<Comment>,
}

#[derive(Debug)]
pub struct CommentReducer;

impl Reducer for CommentReducer {
    const NAME: &'static str = "comments";
    type State = CommentState;
    type Action = CommentAction;

    fn reduce(mut state: CommentState, action: CommentAction) -> CommentState {
        match action {
            CommentAction::FetchAll(request, phase) => state.comments.apply_refresh(request, phase),
        }
        state
    }

    fn item_count(state: &CommentState) -> usize {
        state.comments.items.len()
    }
}
