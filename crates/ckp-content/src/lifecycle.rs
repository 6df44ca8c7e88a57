//! # Content Lifecycle Controller
//!
//! The governed operations over content items: creation, status
//! transitions, field edits, and the admin-only destructive delete.
//! Every operation authorizes through the permission resolver, validates
//! before writing, and records exactly one audit entry per logical
//! change.

use tracing::info;

use ckp_access::{resolve_permissions, ResourceView};
use ckp_audit::{AuditLog, AuditRecord};
use ckp_core::{Actor, ContentId, ContentKind, GovernanceError, MinClinicalRole, Timestamp, WorkspaceRole};

use crate::item::{ContentEdit, ContentItem};
use crate::status::{ContentStatus, NoteStatus};
use crate::store::{CollaboratorStore, ContentCascade, ContentStore};

/// Inputs for creating a content item.
#[derive(Debug, Clone)]
pub struct NewContent {
    /// The content kind to create.
    pub kind: ContentKind,
    /// Title line; must be non-empty.
    pub title: String,
    /// Body text; may be empty in a fresh draft.
    pub body: String,
    /// Clinical seniority threshold for edits (guidelines only).
    pub min_edit_clinical_role: Option<MinClinicalRole>,
}

/// Create a content item in its kind's draft status.
///
/// Notes and cases may be authored by any non-viewer member; guidelines
/// are created by the editorial tier only.
pub fn create_content<S>(
    store: &mut S,
    actor: &Actor,
    new: NewContent,
) -> Result<ContentItem, GovernanceError>
where
    S: ContentStore + AuditLog,
{
    if new.title.trim().is_empty() {
        return Err(GovernanceError::Validation(
            "content title must be non-empty".to_string(),
        ));
    }
    if new.min_edit_clinical_role.is_some() && new.kind != ContentKind::Guideline {
        return Err(GovernanceError::Validation(
            "edit thresholds apply to guidelines only".to_string(),
        ));
    }
    let authorized = match new.kind {
        ContentKind::Note | ContentKind::Case => actor.workspace_role != WorkspaceRole::Viewer,
        ContentKind::Guideline => actor.workspace_role.is_editorial(),
    };
    if !authorized {
        return Err(GovernanceError::unauthorized(
            "create_content",
            "an authoring role for this content kind",
        ));
    }

    let mut item = ContentItem::new_draft(
        new.kind,
        actor.workspace_id,
        actor.id,
        new.title,
        new.body,
    );
    item.min_edit_clinical_role = new.min_edit_clinical_role;
    store.put_content(item.clone());
    store.record(
        AuditRecord::new(
            item.workspace_id,
            Some(actor.id),
            "content.created",
            "content_item",
            Some(item.id.to_string()),
        )
        .with_metadata(serde_json::json!({ "kind": item.kind().to_string() })),
    );
    info!(content = %item.id, kind = %item.kind(), "content created");
    Ok(item)
}

/// Drive a content item along one declared edge of its status table.
///
/// The note submit edge (`DRAFT -> UNDER_REVIEW`) is gated on
/// `can_submit_for_review` and is normally reached through the review
/// workflow; every other edge requires `can_change_status`. Entering a
/// publication status stamps `published_at`.
pub fn transition_status<S>(
    store: &mut S,
    actor: &Actor,
    content_id: ContentId,
    target: ContentStatus,
) -> Result<ContentItem, GovernanceError>
where
    S: ContentStore + CollaboratorStore + AuditLog,
{
    let item = fetch_scoped(store, actor, content_id)?;
    let caps = resolve_permissions(actor, &resource_view(store, &item));

    let (authorized, requirement) = if item.status.is_submit_edge(&target) {
        (caps.can_submit_for_review, "can_submit_for_review")
    } else {
        (caps.can_change_status, "can_change_status")
    };
    if !authorized {
        return Err(GovernanceError::unauthorized("transition_status", requirement));
    }
    if !item.status.is_declared_edge(&target) {
        return Err(GovernanceError::InvalidTransition {
            kind: item.kind().to_string(),
            from: item.status.name(),
            to: target.name(),
        });
    }

    let from = item.status.name();
    let updated = apply_status(store, item, target);
    store.record(
        AuditRecord::new(
            updated.workspace_id,
            Some(actor.id),
            "content.status_changed",
            "content_item",
            Some(updated.id.to_string()),
        )
        .with_metadata(serde_json::json!({
            "from": from,
            "to": target.name(),
        })),
    );
    info!(content = %updated.id, to = %target, "content status changed");
    Ok(updated)
}

/// Set a note's status on behalf of the review workflow.
///
/// The review action itself is the authorization, so no capability gate
/// applies, and the status is set to the verdict mapping directly — a
/// reopened request can deliver its verdict while the note sits in
/// `DRAFT`, which is not a declared edge. No audit entry is written
/// here; the review operation records the one entry for the composite
/// change.
pub fn apply_review_transition<S>(
    store: &mut S,
    note_id: ContentId,
    target: NoteStatus,
) -> Result<ContentItem, GovernanceError>
where
    S: ContentStore,
{
    let item = store
        .get_content(note_id)
        .ok_or_else(|| GovernanceError::not_found("content item", note_id))?;
    if item.kind() != ContentKind::Note {
        return Err(GovernanceError::Validation(format!(
            "review transitions apply to notes, not {}",
            item.kind()
        )));
    }
    Ok(apply_status(store, item, ContentStatus::Note(target)))
}

/// Edit a content item's fields. Independent of status; increments
/// `version` and never touches the status machine.
pub fn edit_content<S>(
    store: &mut S,
    actor: &Actor,
    content_id: ContentId,
    edit: ContentEdit,
) -> Result<ContentItem, GovernanceError>
where
    S: ContentStore + CollaboratorStore + AuditLog,
{
    if edit.is_empty() {
        return Err(GovernanceError::Validation(
            "edit must change at least one field".to_string(),
        ));
    }
    let mut item = fetch_scoped(store, actor, content_id)?;
    let caps = resolve_permissions(actor, &resource_view(store, &item));
    if !caps.can_edit {
        return Err(GovernanceError::unauthorized("edit_content", "can_edit"));
    }

    if let Some(title) = edit.title {
        if title.trim().is_empty() {
            return Err(GovernanceError::Validation(
                "content title must be non-empty".to_string(),
            ));
        }
        item.title = title;
    }
    if let Some(body) = edit.body {
        item.body = body;
    }
    item.version += 1;
    item.updated_at = Timestamp::now();
    store.put_content(item.clone());
    store.record(
        AuditRecord::new(
            item.workspace_id,
            Some(actor.id),
            "content.edited",
            "content_item",
            Some(item.id.to_string()),
        )
        .with_metadata(serde_json::json!({ "version": item.version })),
    );
    info!(content = %item.id, version = item.version, "content edited");
    Ok(item)
}

/// Hard-delete a content item and cascade to its review requests and
/// collaborators. Admin only. Review actions and audit entries survive
/// — they are the record that the item existed.
pub fn delete_content<S>(
    store: &mut S,
    actor: &Actor,
    content_id: ContentId,
) -> Result<(), GovernanceError>
where
    S: ContentStore + CollaboratorStore + ContentCascade + AuditLog,
{
    let item = fetch_scoped(store, actor, content_id)?;
    if actor.workspace_role != WorkspaceRole::Admin {
        return Err(GovernanceError::unauthorized("delete_content", "the admin role"));
    }

    store.remove_content(content_id);
    store.purge_collaborators(content_id);
    store.purge_dependents(content_id);
    store.record(
        AuditRecord::new(
            item.workspace_id,
            Some(actor.id),
            "content.deleted",
            "content_item",
            Some(item.id.to_string()),
        )
        .with_metadata(serde_json::json!({ "kind": item.kind().to_string() })),
    );
    info!(content = %item.id, "content deleted");
    Ok(())
}

/// Fetch an item, treating absence and workspace mismatch identically so
/// cross-tenant probing cannot distinguish them.
pub(crate) fn fetch_scoped<S>(
    store: &S,
    actor: &Actor,
    content_id: ContentId,
) -> Result<ContentItem, GovernanceError>
where
    S: ContentStore,
{
    store
        .get_content(content_id)
        .filter(|item| item.workspace_id == actor.workspace_id)
        .ok_or_else(|| GovernanceError::not_found("content item", content_id))
}

/// Build the resolver's view of an item, including its collaborator list.
pub(crate) fn resource_view<S>(store: &S, item: &ContentItem) -> ResourceView
where
    S: CollaboratorStore,
{
    ResourceView {
        kind: item.kind(),
        author_id: item.author_id,
        collaborator_ids: store.collaborators_for(item.id),
        min_edit_clinical_role: item.min_edit_clinical_role,
        draft: item.status.is_draft(),
    }
}

/// Apply a status change to an item and persist it. Stamps
/// `published_at` on first entry into a publication status.
fn apply_status<S>(store: &mut S, mut item: ContentItem, target: ContentStatus) -> ContentItem
where
    S: ContentStore,
{
    item.status = target;
    if target.is_publication() {
        item.published_at = Some(Timestamp::now());
    }
    store.put_content(item.clone());
    item
}
