//! # Request Phases
//!
//! Every remote operation goes through the same three steps: it is issued, it is pending,
//! and it settles either successfully or with a failure message. [`Phase`] is the explicit
//! value for each step, so reducers can match on it instead of on ad-hoc action names.
//!
//! Each request also carries a [`RequestId`]. Ids are allocated from a monotonically
//! increasing counter shared by all handles of one store, which lets a reducer tell an
//! outdated response apart from the one it is waiting for.

use std::fmt::{self, Display};

/// Identifies one issued request within one store.
///
/// Ordering follows issue order: a larger id was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req_{}", self.0)
    }
}

/// The lifecycle step of a remote operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// The request was issued and has not settled yet.
    Pending,
    /// The request succeeded with the given payload.
    Fulfilled(T),
    /// The request failed. The message is what the page shows to the user.
    Rejected(String),
}

impl<T> Phase<T> {
    /// Short label used in logs (`pending`, `fulfilled`, `rejected`).
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Fulfilled(_) => "fulfilled",
            Phase::Rejected(_) => "rejected",
        }
    }

    /// Builds the terminal phase from a request result.
    pub fn settle<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Phase::Fulfilled(payload),
            Err(e) => Phase::Rejected(e.to_string()),
        }
    }
}
