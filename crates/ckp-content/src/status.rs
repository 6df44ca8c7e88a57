//! # Content Status State Machines
//!
//! One status enum per content type, each with its own transition table,
//! plus the `ContentStatus` tagged union that keeps an item's kind and
//! status from ever disagreeing.
//!
//! ## Transition Tables
//!
//! ```text
//! Note:      Draft ──(submit)──▶ UnderReview ──▶ Approved ──▶ Published ──▶ Archived
//!                ▲                    │              │                          │
//!                └────────────────────┴──────────────┘          Draft ◀─────────┘
//!
//! Case:      Draft ──▶ Published ──▶ Archived ──▶ Draft
//!
//! Guideline: Draft ──▶ Active ──▶ Archived ──▶ Draft
//! ```
//!
//! Initial state is always the draft; no state is terminal — archived
//! content can always return to draft.
//!
//! ## Design Decision
//!
//! Statuses are enums with validated transitions rather than typestate
//! types. Callers hold heterogeneous collections of content items whose
//! statuses are only known at runtime, so the compile-time-state encoding
//! would be unusable at the call sites that matter. The `matches!`-based
//! tables below are exhaustive per variant pair — omitting an edge is a
//! one-line diff, adding a status variant is a compile error in every
//! table.

use serde::{Deserialize, Serialize};

use ckp_core::ContentKind;

// ─── Note ────────────────────────────────────────────────────────────

/// Status of a clinical note — the only kind subject to peer review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    /// Being drafted by its author.
    Draft,
    /// Submitted for peer review; an open review cycle exists.
    UnderReview,
    /// Review approved; awaiting publication.
    Approved,
    /// Visible to the workspace.
    Published,
    /// Retired from circulation; may return to draft.
    Archived,
}

impl NoteStatus {
    /// Whether `self -> to` is a declared edge of the note table.
    ///
    /// The `Draft -> UnderReview` edge exists but is reachable only
    /// through review submission (see [`ContentStatus::is_submit_edge`]).
    pub fn can_transition_to(self, to: NoteStatus) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::UnderReview)
                | (Self::UnderReview, Self::Approved)
                | (Self::UnderReview, Self::Draft)
                | (Self::Approved, Self::Published)
                | (Self::Approved, Self::Draft)
                | (Self::Published, Self::Archived)
                | (Self::Archived, Self::Draft)
        )
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        };
        f.write_str(s)
    }
}

// ─── Case ────────────────────────────────────────────────────────────

/// Status of a structured clinical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Being drafted by its author and collaborators.
    Draft,
    /// Visible to the workspace.
    Published,
    /// Retired from circulation; may return to draft.
    Archived,
}

impl CaseStatus {
    /// Whether `self -> to` is a declared edge of the case table.
    pub fn can_transition_to(self, to: CaseStatus) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Published)
                | (Self::Published, Self::Archived)
                | (Self::Archived, Self::Draft)
        )
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        };
        f.write_str(s)
    }
}

// ─── Guideline ───────────────────────────────────────────────────────

/// Status of a clinical guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineStatus {
    /// Being drafted.
    Draft,
    /// In force for the workspace.
    Active,
    /// Superseded or withdrawn; may return to draft.
    Archived,
}

impl GuidelineStatus {
    /// Whether `self -> to` is a declared edge of the guideline table.
    pub fn can_transition_to(self, to: GuidelineStatus) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Active)
                | (Self::Active, Self::Archived)
                | (Self::Archived, Self::Draft)
        )
    }
}

impl std::fmt::Display for GuidelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
        };
        f.write_str(s)
    }
}

// ─── Tagged Union ────────────────────────────────────────────────────

/// The status of a content item, tagged by kind.
///
/// Carrying the kind inside the status means a note can never hold a
/// guideline status: the pairing is unrepresentable, not merely checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    /// A note status.
    Note(NoteStatus),
    /// A case status.
    Case(CaseStatus),
    /// A guideline status.
    Guideline(GuidelineStatus),
}

impl ContentStatus {
    /// The initial (draft) status for a kind.
    pub fn draft_of(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Note => Self::Note(NoteStatus::Draft),
            ContentKind::Case => Self::Case(CaseStatus::Draft),
            ContentKind::Guideline => Self::Guideline(GuidelineStatus::Draft),
        }
    }

    /// The content kind this status belongs to.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Note(_) => ContentKind::Note,
            Self::Case(_) => ContentKind::Case,
            Self::Guideline(_) => ContentKind::Guideline,
        }
    }

    /// Whether this is the kind's draft status.
    pub fn is_draft(&self) -> bool {
        matches!(
            self,
            Self::Note(NoteStatus::Draft)
                | Self::Case(CaseStatus::Draft)
                | Self::Guideline(GuidelineStatus::Draft)
        )
    }

    /// Whether entering this status makes the item live for the
    /// workspace, which stamps the publication timestamp.
    pub fn is_publication(&self) -> bool {
        matches!(
            self,
            Self::Note(NoteStatus::Published)
                | Self::Case(CaseStatus::Published)
                | Self::Guideline(GuidelineStatus::Active)
        )
    }

    /// Whether `self -> target` is a declared edge. A kind mismatch is
    /// never a declared edge.
    pub fn is_declared_edge(&self, target: &ContentStatus) -> bool {
        match (self, target) {
            (Self::Note(from), Self::Note(to)) => from.can_transition_to(*to),
            (Self::Case(from), Self::Case(to)) => from.can_transition_to(*to),
            (Self::Guideline(from), Self::Guideline(to)) => from.can_transition_to(*to),
            _ => false,
        }
    }

    /// Whether `self -> target` is the note submit edge
    /// (`Draft -> UnderReview`), which is gated on `can_submit_for_review`
    /// rather than `can_change_status`.
    pub fn is_submit_edge(&self, target: &ContentStatus) -> bool {
        matches!(
            (self, target),
            (Self::Note(NoteStatus::Draft), Self::Note(NoteStatus::UnderReview))
        )
    }

    /// The canonical status name (e.g., `UNDER_REVIEW`).
    pub fn name(&self) -> String {
        match self {
            Self::Note(s) => s.to_string(),
            Self::Case(s) => s.to_string(),
            Self::Guideline(s) => s.to_string(),
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
