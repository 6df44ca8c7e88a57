//! # Review Request
//!
//! One tracked review cycle for a note. A note may accumulate many
//! closed cycles over its life, but at most one open cycle at a time —
//! the storage adapter enforces that uniqueness at insert.
//!
//! ## States
//!
//! ```text
//! Pending ──assign──▶ InReview ──verdict──▶ Approved | Rejected | ChangesRequested
//!    ▲                   │                               │
//!    │                   └──────verdict─────(admin/editor may rule without assignment)
//!    └───────────────reopen / revision───────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use ckp_core::{ContentId, ReviewRequestId, Timestamp, UserId, WorkspaceId};

// ─── Review Status ───────────────────────────────────────────────────

/// The state of a review request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Submitted, awaiting reviewer assignment.
    Pending,
    /// A reviewer is assigned and working.
    InReview,
    /// Closed with an approval verdict.
    Approved,
    /// Closed with a rejection verdict.
    Rejected,
    /// Closed asking the author for changes.
    ChangesRequested,
}

impl ReviewStatus {
    /// Whether the request is open (accepts assignment and verdicts).
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InReview)
    }

    /// Whether the request is closed with a verdict (may be reopened).
    pub fn is_verdict(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::ChangesRequested)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::InReview => "IN_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
        };
        f.write_str(s)
    }
}

// ─── Verdict ─────────────────────────────────────────────────────────

/// A reviewer's decision on an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The note is clinically sound.
    Approved,
    /// The note should not advance.
    Rejected,
    /// The author should revise and resubmit.
    ChangesRequested,
}

impl Verdict {
    /// The request status this verdict closes the request into.
    pub fn request_status(&self) -> ReviewStatus {
        match self {
            Self::Approved => ReviewStatus::Approved,
            Self::Rejected => ReviewStatus::Rejected,
            Self::ChangesRequested => ReviewStatus::ChangesRequested,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.request_status().fmt(f)
    }
}

// ─── Priority ────────────────────────────────────────────────────────

/// Review priority, set at assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPriority {
    /// No urgency.
    Low,
    /// Default priority.
    Normal,
    /// Ahead of normal work.
    High,
    /// Clinically time-critical.
    Urgent,
}

impl std::fmt::Display for ReviewPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        };
        f.write_str(s)
    }
}

// ─── Review Request ──────────────────────────────────────────────────

/// One review cycle for a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Unique request identifier.
    pub id: ReviewRequestId,
    /// The owning workspace.
    pub workspace_id: WorkspaceId,
    /// The note under review.
    pub note_id: ContentId,
    /// The author who submitted the note.
    pub requested_by: UserId,
    /// The assigned reviewer, once assigned.
    pub reviewer_id: Option<UserId>,
    /// Current request state.
    pub status: ReviewStatus,
    /// Review priority.
    pub priority: ReviewPriority,
    /// Optional review deadline.
    pub due_date: Option<Timestamp>,
    /// When the cycle was opened (UTC).
    pub created_at: Timestamp,
    /// When the cycle last changed (UTC).
    pub updated_at: Timestamp,
}

impl ReviewRequest {
    /// Open a new pending cycle for a note.
    pub fn new_pending(workspace_id: WorkspaceId, note_id: ContentId, requested_by: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id: ReviewRequestId::new(),
            workspace_id,
            note_id,
            requested_by,
            reviewer_id: None,
            status: ReviewStatus::Pending,
            priority: ReviewPriority::Normal,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the cycle is open.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_states() {
        assert!(ReviewStatus::Pending.is_open());
        assert!(ReviewStatus::InReview.is_open());
        assert!(!ReviewStatus::Approved.is_open());
        assert!(!ReviewStatus::Rejected.is_open());
        assert!(!ReviewStatus::ChangesRequested.is_open());
    }

    #[test]
    fn test_verdict_states() {
        assert!(ReviewStatus::Approved.is_verdict());
        assert!(ReviewStatus::ChangesRequested.is_verdict());
        assert!(!ReviewStatus::Pending.is_verdict());
    }

    #[test]
    fn test_verdict_maps_to_request_status() {
        assert_eq!(Verdict::Approved.request_status(), ReviewStatus::Approved);
        assert_eq!(Verdict::Rejected.request_status(), ReviewStatus::Rejected);
        assert_eq!(
            Verdict::ChangesRequested.request_status(),
            ReviewStatus::ChangesRequested
        );
    }

    #[test]
    fn test_priority_ordering() {
        assert!(ReviewPriority::Low < ReviewPriority::Normal);
        assert!(ReviewPriority::High < ReviewPriority::Urgent);
    }

    #[test]
    fn test_new_pending_defaults() {
        let request =
            ReviewRequest::new_pending(WorkspaceId::new(), ContentId::new(), UserId::new());
        assert_eq!(request.status, ReviewStatus::Pending);
        assert_eq!(request.priority, ReviewPriority::Normal);
        assert!(request.reviewer_id.is_none());
        assert!(request.is_open());
    }
}
