//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the governance core.
//! These prevent accidental identifier confusion — you cannot pass a
//! `ContentId` where a `UserId` is expected.
//!
//! ## Invariant
//!
//! Type-level distinction between identifier namespaces means a review
//! request can never be looked up by a note id, and an audit entry can
//! never reference an actor through the wrong namespace.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a workspace (one hospital or department tenant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub Uuid);

/// Unique identifier for a user, as supplied by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Unique identifier for a content item (note, case, or guideline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentId(pub Uuid);

/// Unique identifier for a review request (one review cycle on a note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewRequestId(pub Uuid);

/// Unique identifier for an immutable review action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewActionId(pub Uuid);

/// Unique identifier for an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuditEntryId(pub Uuid);

macro_rules! impl_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

impl_id!(WorkspaceId, "workspace");
impl_id!(UserId, "user");
impl_id!(ContentId, "content");
impl_id!(ReviewRequestId, "review");
impl_id!(ReviewActionId, "review-action");
impl_id!(AuditEntryId, "audit");
