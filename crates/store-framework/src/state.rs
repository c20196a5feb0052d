//! # Resource State
//!
//! [`ResourceState`] is the local mirror of one remote collection: the ordered items, a
//! loading flag, and the last error message. Its `apply_*` methods are the generic lifecycle
//! transitions that every store reuses:
//!
//! | operation | pending | fulfilled | rejected |
//! |-----------|---------|-----------|----------|
//! | refresh   | loading, clear error | replace items wholesale, clear error | keep items, set error |
//! | create    | loading, clear error | append returned entity | set error |
//! | update    | loading, clear error | replace matching entity in place | set error |
//! | delete    | loading, clear error | remove matching entity | set error |
//!
//! ## Loading & Stale Responses
//!
//! `loading` is true while at least one request of the store is outstanding. Refresh
//! responses are fenced by [`RequestId`]: once a newer refresh has been issued, the response of
//! an older one only settles its own request and leaves `items` and `error` alone.

use crate::entity::RemoteEntity;
use crate::phase::{Phase, RequestId};
use tracing::debug;

/// The local mirror of one remote collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T: RemoteEntity> {
    /// Items in server order (refresh) plus local appends.
    pub items: Vec<T>,
    /// True while at least one request is outstanding.
    pub loading: bool,
    /// Message of the last failed request, cleared on issue and on success.
    pub error: Option<String>,
    outstanding: usize,
    latest_refresh: Option<RequestId>,
}

impl<T: RemoteEntity> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            outstanding: 0,
            latest_refresh: None,
        }
    }

    /// Creates a settled state holding `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::new()
        }
    }

    /// Number of issued requests that have not settled yet.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Looks an item up by id.
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Applies one phase of a full-collection fetch.
    pub fn apply_refresh(&mut self, request: RequestId, phase: Phase<Vec<T>>) {
        match phase {
            Phase::Pending => {
                self.begin();
                self.latest_refresh = self.latest_refresh.max(Some(request));
            }
            Phase::Fulfilled(items) => {
                self.settle();
                if self.is_stale(request) {
                    debug!(entity_type = entity_type::<T>(), %request, "Ignoring stale refresh");
                    return;
                }
                self.error = None;
                self.items = items;
            }
            Phase::Rejected(message) => {
                self.settle();
                if self.is_stale(request) {
                    debug!(entity_type = entity_type::<T>(), %request, "Ignoring stale refresh failure");
                    return;
                }
                self.error = Some(message);
            }
        }
    }

    /// Applies one phase of a create request.
    pub fn apply_create(&mut self, phase: Phase<T>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(item) => {
                self.succeed();
                self.items.push(item);
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    /// Applies one phase of a full-replacement update.
    ///
    /// A fulfilled update whose id is not present is dropped.
    pub fn apply_update(&mut self, phase: Phase<T>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(item) => {
                self.succeed();
                let id = item.id();
                match self.items.iter_mut().find(|existing| existing.id() == id) {
                    Some(slot) => *slot = item,
                    None => debug!(entity_type = entity_type::<T>(), %id, "Update for unknown id dropped"),
                }
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    /// Applies one phase of a delete request. Deleting an absent id is a no-op.
    pub fn apply_delete(&mut self, phase: Phase<T::Id>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(id) => {
                self.succeed();
                self.items.retain(|item| item.id() != id);
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    fn begin(&mut self) {
        self.outstanding += 1;
        self.loading = true;
        self.error = None;
    }

    fn settle(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.loading = self.outstanding > 0;
    }

    fn succeed(&mut self) {
        self.settle();
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.settle();
        self.error = Some(message);
    }

    fn is_stale(&self, request: RequestId) -> bool {
        self.latest_refresh.is_some_and(|latest| request < latest)
    }
}

/// Extracts the short type name (e.g. "Product" instead of "product_catalog::model::Product").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
