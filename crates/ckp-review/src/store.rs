//! # Review Store Port
//!
//! Repository interface for review requests and their action history.
//! Two guarantees live at this layer rather than in the engine, because
//! rechecking them in application code leaves a check-then-act race:
//!
//! - `insert_open` refuses a second open request for the same note;
//! - `append_action` assigns a monotonic sequence.

use ckp_core::{ContentId, GovernanceError, ReviewRequestId};

use crate::action::{NewReviewAction, ReviewAction};
use crate::request::ReviewRequest;

/// Storage port for review cycles.
pub trait ReviewStore {
    /// Fetch a request by id.
    fn get_request(&self, id: ReviewRequestId) -> Option<ReviewRequest>;

    /// The open (`PENDING`/`IN_REVIEW`) request for a note, if any.
    fn open_request_for(&self, note_id: ContentId) -> Option<ReviewRequest>;

    /// Insert a new open request.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceError::Conflict`] if the note already has an
    /// open request. This is the storage-level uniqueness point for the
    /// one-open-request-per-note invariant.
    fn insert_open_request(&mut self, request: ReviewRequest) -> Result<(), GovernanceError>;

    /// Replace a stored request.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceError::Conflict`] if the write would leave
    /// two open requests for one note — the reopen path flips a closed
    /// request open and must not race a newer open cycle.
    fn put_request(&mut self, request: ReviewRequest) -> Result<(), GovernanceError>;

    /// Append an action, returning it with its assigned id, sequence,
    /// and timestamp. Append-only — no update or delete exists.
    fn append_action(&mut self, action: NewReviewAction) -> ReviewAction;

    /// The action history for a cycle, oldest first.
    fn actions_for(&self, request_id: ReviewRequestId) -> Vec<ReviewAction>;

    /// Delete every request for a note (content-delete cascade). The
    /// action history survives.
    fn purge_requests_for(&mut self, note_id: ContentId);
}
