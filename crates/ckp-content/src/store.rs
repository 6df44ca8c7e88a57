//! # Content and Collaborator Store Ports
//!
//! Repository interfaces injected into the governed operations, enabling
//! deterministic test doubles and keeping the operations free of any
//! query-builder coupling. The in-memory adapter lives in `ckp-store`.

use ckp_core::{ContentId, GovernanceError, UserId};

use crate::collaborator::Collaborator;
use crate::item::ContentItem;

/// Storage port for content items.
///
/// Reads return owned snapshots; workspace scoping is enforced by the
/// operations, which treat a workspace mismatch as `NotFound`.
pub trait ContentStore {
    /// Fetch an item by id.
    fn get_content(&self, id: ContentId) -> Option<ContentItem>;

    /// Insert or replace an item.
    fn put_content(&mut self, item: ContentItem);

    /// Delete an item, returning it if present.
    fn remove_content(&mut self, id: ContentId) -> Option<ContentItem>;
}

/// Storage port for case collaborators.
///
/// Adapters must enforce `(case_id, user_id)` uniqueness at insert time
/// — the registry rechecks it, but the storage guarantee is what closes
/// the check-then-act window under concurrency.
pub trait CollaboratorStore {
    /// The collaborator user ids for a case.
    fn collaborators_for(&self, case_id: ContentId) -> Vec<UserId>;

    /// Insert a collaborator row.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceError::Conflict`] if the `(case_id, user_id)`
    /// pair already exists.
    fn insert_collaborator(&mut self, collaborator: Collaborator) -> Result<(), GovernanceError>;

    /// Delete a collaborator row, returning whether one existed.
    fn delete_collaborator(&mut self, case_id: ContentId, user_id: UserId) -> bool;

    /// Delete every collaborator row for a case (content-delete cascade).
    fn purge_collaborators(&mut self, case_id: ContentId);
}

/// Cascade hook for dependents of a content item outside this crate's
/// ownership (open and closed review cycles). Invoked only by the
/// admin-authorized destructive delete; review actions and audit entries
/// are intentionally not covered.
pub trait ContentCascade {
    /// Delete dependent rows for the given content item.
    fn purge_dependents(&mut self, content_id: ContentId);
}
