//! # ckp-review — Peer-Review Workflow Engine
//!
//! Review cycles over clinical notes: request submission, reviewer
//! assignment, verdicts, discussion, reopening, and revision
//! resubmission, with an immutable per-cycle action log.
//!
//! ## Architecture
//!
//! - **Request** (`request.rs`): `ReviewRequest` and its closed status,
//!   verdict, and priority enums.
//! - **Action** (`action.rs`): the append-only `ReviewAction` history.
//! - **Store** (`store.rs`): the repository port; the
//!   one-open-request-per-note invariant lives at this layer.
//! - **Engine** (`engine.rs`): the governed operations, each atomic
//!   across request + note + action log, each recording exactly one
//!   audit entry.
//!
//! ## Crate Policy
//!
//! - Note status changes go through
//!   [`ckp_content::apply_review_transition`] — this crate never
//!   re-declares the note transition table.
//! - Review actions are never mutated or deleted, even when the note
//!   they describe is destructively removed.

pub mod action;
pub mod engine;
pub mod request;
pub mod store;

pub use action::{NewReviewAction, ReviewAction, ReviewActionKind};
pub use engine::{
    add_comment, assign_reviewer, reopen, submit_for_review, submit_revision, submit_verdict,
};
pub use request::{ReviewPriority, ReviewRequest, ReviewStatus, Verdict};
pub use store::ReviewStore;
