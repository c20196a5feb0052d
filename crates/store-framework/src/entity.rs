//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait describes a record that lives on a remote server and is mirrored
//! locally by a [`ResourceState`](crate::ResourceState). The server owns identity: a new record is
//! submitted as a `Draft` (no id) and comes back as the full entity with its id assigned.
//!
//! # Architecture Note
//! The generic lifecycle transitions (replace all, append, replace by id, remove by id) are
//! written *once* in [`ResourceState`](crate::ResourceState). They only need two things from an
//! entity: its identifier type, and a way to read the identifier. Everything else about the
//! record stays in the domain crate.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any mirrored record must implement to be held by a `ResourceState`.
///
/// Associated types keep payloads apart at compile time: a product store accepts a
/// `ProductDraft` on create and cannot be handed a comment by mistake.
pub trait RemoteEntity: Clone + Debug + Send + Sync + 'static {
    /// The server-assigned identifier (e.g. a `u64` newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data submitted to create a new instance. The server assigns the id.
    type Draft: Send + Sync + Debug;

    /// Returns the identifier of this record.
    fn id(&self) -> Self::Id;
}
