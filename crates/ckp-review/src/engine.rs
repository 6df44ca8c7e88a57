//! # Review Workflow Engine
//!
//! The governed operations that drive a note through peer review. Each
//! operation is a single atomic unit across the review request, the
//! note, and the action log: validation runs first, the one
//! storage-constrained write runs next, and the remaining appends cannot
//! fail after it — a caller never observes a note transitioned without
//! its request, or a verdict without its action.
//!
//! The engine composes the content lifecycle controller
//! ([`ckp_content::apply_review_transition`]) rather than re-declaring
//! the note transition table.

use tracing::info;

use ckp_access::{resolve_permissions, ResourceView};
use ckp_audit::{AuditLog, AuditRecord, DomainEvent, Outbox};
use ckp_core::{
    Actor, ContentId, ContentKind, GovernanceError, ReviewRequestId, Timestamp, UserId,
};
use ckp_content::{apply_review_transition, ContentStore, NoteStatus};

use crate::action::{NewReviewAction, ReviewAction, ReviewActionKind};
use crate::request::{ReviewPriority, ReviewRequest, ReviewStatus, Verdict};
use crate::store::ReviewStore;

/// Open a review cycle on a draft note.
///
/// Requires `can_submit_for_review` (the author, while the note is in
/// draft). Fails with `Conflict` if the note already has an open cycle —
/// the storage adapter enforces that uniqueness, so two concurrent
/// submissions cannot both land. Atomically creates the pending request,
/// moves the note to `UNDER_REVIEW`, and appends the `SUBMITTED` action.
pub fn submit_for_review<S>(
    store: &mut S,
    actor: &Actor,
    note_id: ContentId,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore + ContentStore + AuditLog + Outbox,
{
    let note = fetch_note(store, actor, note_id)?;
    let caps = resolve_permissions(
        actor,
        &ResourceView {
            kind: ContentKind::Note,
            author_id: note.author_id,
            collaborator_ids: Vec::new(),
            min_edit_clinical_role: None,
            draft: note.status.is_draft(),
        },
    );
    if !caps.can_submit_for_review {
        // The author seeing a non-draft note usually means an open cycle
        // already moved it to UNDER_REVIEW; report that as the conflict
        // it is rather than a capability failure.
        if actor.id == note.author_id {
            if let Some(open) = store.open_request_for(note_id) {
                return Err(GovernanceError::Conflict(format!(
                    "note {} already has an open review request ({})",
                    note_id, open.id
                )));
            }
        }
        return Err(GovernanceError::unauthorized(
            "submit_for_review",
            "can_submit_for_review",
        ));
    }

    let request = ReviewRequest::new_pending(note.workspace_id, note_id, actor.id);
    store.insert_open_request(request.clone())?;
    apply_review_transition(store, note_id, NoteStatus::UnderReview)?;
    store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::Submitted,
        note: None,
    });
    store.record(
        AuditRecord::new(
            request.workspace_id,
            Some(actor.id),
            "review.submitted",
            "review_request",
            Some(request.id.to_string()),
        )
        .with_metadata(serde_json::json!({ "note": note_id.to_string() })),
    );
    store.publish(DomainEvent::new(
        request.workspace_id,
        "review.submitted",
        serde_json::json!({ "request": request.id.to_string(), "note": note_id.to_string() }),
    ));
    info!(request = %request.id, note = %note_id, "review cycle opened");
    Ok(request)
}

/// Assign (or reassign) a reviewer on an open request.
///
/// Editorial tier only. Moves the request to `IN_REVIEW` and optionally
/// sets priority and due date. May be called repeatedly while the
/// request stays open.
pub fn assign_reviewer<S>(
    store: &mut S,
    actor: &Actor,
    request_id: ReviewRequestId,
    reviewer_id: UserId,
    priority: Option<ReviewPriority>,
    due_date: Option<Timestamp>,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore + AuditLog + Outbox,
{
    let mut request = fetch_request(store, actor, request_id)?;
    if !actor.workspace_role.is_editorial() {
        return Err(GovernanceError::unauthorized(
            "assign_reviewer",
            "the editorial tier",
        ));
    }
    if !request.is_open() {
        return Err(GovernanceError::Conflict(format!(
            "cannot assign a reviewer on a {} request",
            request.status
        )));
    }

    request.reviewer_id = Some(reviewer_id);
    request.status = ReviewStatus::InReview;
    if let Some(priority) = priority {
        request.priority = priority;
    }
    if let Some(due_date) = due_date {
        request.due_date = Some(due_date);
    }
    request.updated_at = Timestamp::now();
    store.put_request(request.clone())?;
    store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::Assigned,
        note: None,
    });
    store.record(
        AuditRecord::new(
            request.workspace_id,
            Some(actor.id),
            "review.assigned",
            "review_request",
            Some(request.id.to_string()),
        )
        .with_metadata(serde_json::json!({
            "reviewer": reviewer_id.to_string(),
            "priority": request.priority.to_string(),
        })),
    );
    store.publish(DomainEvent::new(
        request.workspace_id,
        "review.assigned",
        serde_json::json!({ "request": request.id.to_string(), "reviewer": reviewer_id.to_string() }),
    ));
    info!(request = %request.id, reviewer = %reviewer_id, "reviewer assigned");
    Ok(request)
}

/// Deliver a verdict on an open request.
///
/// Requires the assigned reviewer or the editorial tier. The verdict is
/// the authorization for the note's status change: `APPROVED` moves the
/// note to `APPROVED`, `REJECTED` and `CHANGES_REQUESTED` return it to
/// `DRAFT`. One audit entry covers the composite change.
pub fn submit_verdict<S>(
    store: &mut S,
    actor: &Actor,
    request_id: ReviewRequestId,
    verdict: Verdict,
    note: Option<String>,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore + ContentStore + AuditLog + Outbox,
{
    let mut request = fetch_request(store, actor, request_id)?;
    let is_reviewer = request.reviewer_id == Some(actor.id);
    if !is_reviewer && !actor.workspace_role.is_editorial() {
        return Err(GovernanceError::unauthorized(
            "submit_verdict",
            "the assigned reviewer or the editorial tier",
        ));
    }
    if !request.is_open() {
        return Err(GovernanceError::Conflict(format!(
            "cannot deliver a verdict on a {} request",
            request.status
        )));
    }

    let note_status = match verdict {
        Verdict::Approved => NoteStatus::Approved,
        Verdict::Rejected | Verdict::ChangesRequested => NoteStatus::Draft,
    };
    apply_review_transition(store, request.note_id, note_status)?;
    request.status = verdict.request_status();
    request.updated_at = Timestamp::now();
    store.put_request(request.clone())?;
    store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::from_verdict(verdict),
        note,
    });
    store.record(
        AuditRecord::new(
            request.workspace_id,
            Some(actor.id),
            "review.verdict_submitted",
            "review_request",
            Some(request.id.to_string()),
        )
        .with_metadata(serde_json::json!({
            "verdict": verdict.to_string(),
            "note_status": note_status.to_string(),
        })),
    );
    store.publish(DomainEvent::new(
        request.workspace_id,
        "review.verdict_submitted",
        serde_json::json!({ "request": request.id.to_string(), "verdict": verdict.to_string() }),
    ));
    info!(request = %request.id, verdict = %verdict, "verdict delivered");
    Ok(request)
}

/// Append a discussion comment to a cycle's history.
///
/// Any workspace member with view access to the note may comment, on
/// open and closed cycles alike. No status changes.
pub fn add_comment<S>(
    store: &mut S,
    actor: &Actor,
    request_id: ReviewRequestId,
    text: &str,
) -> Result<ReviewAction, GovernanceError>
where
    S: ReviewStore + AuditLog,
{
    if text.trim().is_empty() {
        return Err(GovernanceError::Validation(
            "comment text must be non-empty".to_string(),
        ));
    }
    let request = fetch_request(store, actor, request_id)?;

    let action = store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::CommentAdded,
        note: Some(text.to_string()),
    });
    store.record(AuditRecord::new(
        request.workspace_id,
        Some(actor.id),
        "review.comment_added",
        "review_request",
        Some(request.id.to_string()),
    ));
    Ok(action)
}

/// Reopen a cycle closed with a verdict, returning it to `PENDING`.
///
/// Editorial tier only. The note's status is deliberately left untouched
/// — even if the note has since moved to published or archived through
/// other means, reconciliation is the caller's decision, not the
/// engine's.
pub fn reopen<S>(
    store: &mut S,
    actor: &Actor,
    request_id: ReviewRequestId,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore + AuditLog,
{
    let mut request = fetch_request(store, actor, request_id)?;
    if !actor.workspace_role.is_editorial() {
        return Err(GovernanceError::unauthorized("reopen", "the editorial tier"));
    }
    if !request.status.is_verdict() {
        return Err(GovernanceError::Conflict(format!(
            "only a request closed with a verdict can be reopened, not {}",
            request.status
        )));
    }

    request.status = ReviewStatus::Pending;
    request.updated_at = Timestamp::now();
    store.put_request(request.clone())?;
    store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::Reopened,
        note: None,
    });
    store.record(AuditRecord::new(
        request.workspace_id,
        Some(actor.id),
        "review.reopened",
        "review_request",
        Some(request.id.to_string()),
    ));
    info!(request = %request.id, "review cycle reopened");
    Ok(request)
}

/// Resubmit a note after a changes-requested verdict.
///
/// Requires the requesting author. Returns the cycle to `PENDING`
/// (keeping the reviewer, so the editor can re-confirm or reassign) and
/// moves the note back to `UNDER_REVIEW`.
pub fn submit_revision<S>(
    store: &mut S,
    actor: &Actor,
    request_id: ReviewRequestId,
    note: Option<String>,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore + ContentStore + AuditLog + Outbox,
{
    let mut request = fetch_request(store, actor, request_id)?;
    if actor.id != request.requested_by {
        return Err(GovernanceError::unauthorized(
            "submit_revision",
            "the requesting author",
        ));
    }
    if request.status != ReviewStatus::ChangesRequested {
        return Err(GovernanceError::Conflict(format!(
            "only a changes-requested cycle accepts a revision, not {}",
            request.status
        )));
    }
    // Confirm the note still exists before the request flips open.
    fetch_note(store, actor, request.note_id)?;

    request.status = ReviewStatus::Pending;
    request.updated_at = Timestamp::now();
    store.put_request(request.clone())?;
    apply_review_transition(store, request.note_id, NoteStatus::UnderReview)?;
    store.append_action(NewReviewAction {
        review_request_id: request.id,
        workspace_id: request.workspace_id,
        actor_id: actor.id,
        kind: ReviewActionKind::RevisionSubmitted,
        note,
    });
    store.record(AuditRecord::new(
        request.workspace_id,
        Some(actor.id),
        "review.revision_submitted",
        "review_request",
        Some(request.id.to_string()),
    ));
    store.publish(DomainEvent::new(
        request.workspace_id,
        "review.revision_submitted",
        serde_json::json!({ "request": request.id.to_string(), "note": request.note_id.to_string() }),
    ));
    info!(request = %request.id, "revision submitted");
    Ok(request)
}

/// Fetch a request, treating absence and workspace mismatch identically.
fn fetch_request<S>(
    store: &S,
    actor: &Actor,
    request_id: ReviewRequestId,
) -> Result<ReviewRequest, GovernanceError>
where
    S: ReviewStore,
{
    store
        .get_request(request_id)
        .filter(|r| r.workspace_id == actor.workspace_id)
        .ok_or_else(|| GovernanceError::not_found("review request", request_id))
}

/// Fetch a note, rejecting other kinds and other workspaces.
fn fetch_note<S>(
    store: &S,
    actor: &Actor,
    note_id: ContentId,
) -> Result<ckp_content::ContentItem, GovernanceError>
where
    S: ContentStore,
{
    let item = store
        .get_content(note_id)
        .filter(|item| item.workspace_id == actor.workspace_id)
        .ok_or_else(|| GovernanceError::not_found("content item", note_id))?;
    if item.kind() != ContentKind::Note {
        return Err(GovernanceError::Validation(format!(
            "review cycles apply to notes, not {}",
            item.kind()
        )));
    }
    Ok(item)
}
