//! # Review Action Log
//!
//! The immutable event history of a review cycle. Actions are appended
//! with a store-assigned monotonic sequence and never mutated or deleted
//! — not even when the note they describe is destructively removed.

use serde::{Deserialize, Serialize};

use ckp_core::{ReviewActionId, ReviewRequestId, Timestamp, UserId, WorkspaceId};

use crate::request::Verdict;

/// The kinds of event recorded in a review cycle's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewActionKind {
    /// The author opened the cycle.
    Submitted,
    /// An editor assigned (or reassigned) a reviewer.
    Assigned,
    /// Approval verdict delivered.
    Approved,
    /// Rejection verdict delivered.
    Rejected,
    /// Changes-requested verdict delivered.
    ChangesRequested,
    /// A discussion comment, with no status effect.
    CommentAdded,
    /// The author resubmitted after requested changes.
    RevisionSubmitted,
    /// An editor reopened a closed cycle.
    Reopened,
}

impl ReviewActionKind {
    /// The action kind recording a given verdict.
    pub fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Approved => Self::Approved,
            Verdict::Rejected => Self::Rejected,
            Verdict::ChangesRequested => Self::ChangesRequested,
        }
    }
}

impl std::fmt::Display for ReviewActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Submitted => "SUBMITTED",
            Self::Assigned => "ASSIGNED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::CommentAdded => "COMMENT_ADDED",
            Self::RevisionSubmitted => "REVISION_SUBMITTED",
            Self::Reopened => "REOPENED",
        };
        f.write_str(s)
    }
}

/// What an operation supplies when appending an action; identifier,
/// sequence, and timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReviewAction {
    /// The cycle this action belongs to.
    pub review_request_id: ReviewRequestId,
    /// The owning workspace.
    pub workspace_id: WorkspaceId,
    /// The acting user.
    pub actor_id: UserId,
    /// What happened.
    pub kind: ReviewActionKind,
    /// Free-text note attached to the action, if any.
    pub note: Option<String>,
}

/// One appended, immutable review action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAction {
    /// Unique action identifier.
    pub id: ReviewActionId,
    /// The cycle this action belongs to.
    pub review_request_id: ReviewRequestId,
    /// The owning workspace.
    pub workspace_id: WorkspaceId,
    /// The acting user.
    pub actor_id: UserId,
    /// What happened.
    pub kind: ReviewActionKind,
    /// Free-text note attached to the action, if any.
    pub note: Option<String>,
    /// Store-assigned monotonic sequence; orders actions sharing a
    /// timestamp.
    pub seq: u64,
    /// When the action was appended (UTC).
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_to_action_kind() {
        assert_eq!(
            ReviewActionKind::from_verdict(Verdict::Approved),
            ReviewActionKind::Approved
        );
        assert_eq!(
            ReviewActionKind::from_verdict(Verdict::ChangesRequested),
            ReviewActionKind::ChangesRequested
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReviewActionKind::RevisionSubmitted.to_string(), "REVISION_SUBMITTED");
        assert_eq!(ReviewActionKind::CommentAdded.to_string(), "COMMENT_ADDED");
    }
}
