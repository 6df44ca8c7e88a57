//! # Permission Resolver
//!
//! Computes the capability set for an actor against a resource view.
//! This is the single authorization point for the governance core: the
//! lifecycle controller, review engine, and collaborator registry all
//! gate their operations on the output of [`resolve_permissions`].
//!
//! ## Rules
//!
//! - `can_change_status` — editorial tier (admin or editor).
//! - `can_manage_collaborators` — editorial tier, or the resource author.
//! - `can_edit` (note/case) — editorial tier, or a contributor editing
//!   their own item, or a listed collaborator.
//! - `can_edit` (guideline) — admin, or an editor clearing the
//!   guideline's clinical seniority threshold.
//! - `can_submit_for_review` — the author, while the item is in draft.
//! - `can_view` — any workspace member; the viewer tier exists to grant
//!   exactly this.

use serde::{Deserialize, Serialize};

use ckp_core::{Actor, ContentKind, MinClinicalRole, UserId, WorkspaceRole};

use crate::seniority::has_required_clinical_role;

/// The authorization-relevant projection of a content item.
///
/// Built by the owning component from the item plus its collaborator
/// list; the resolver itself never touches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceView {
    /// The content kind, which selects the edit rule.
    pub kind: ContentKind,
    /// The original author.
    pub author_id: UserId,
    /// Ad-hoc collaborators (cases only; empty otherwise).
    pub collaborator_ids: Vec<UserId>,
    /// Clinical seniority threshold for guideline edits, if set.
    pub min_edit_clinical_role: Option<MinClinicalRole>,
    /// Whether the item is currently in its draft status.
    pub draft: bool,
}

/// The capability set computed for one actor against one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// May read the resource.
    pub can_view: bool,
    /// May edit the resource's content fields.
    pub can_edit: bool,
    /// May drive the resource through its status state machine.
    pub can_change_status: bool,
    /// May add or remove ad-hoc collaborators.
    pub can_manage_collaborators: bool,
    /// May open a review cycle on the resource.
    pub can_submit_for_review: bool,
}

/// Compute the capability set for `actor` against `resource`.
///
/// Pure and total — no storage access, no failure mode. Callers are
/// expected to have already established that the actor is a member of
/// the resource's workspace; the resolver only combines role, authorship,
/// collaborator membership, and clinical seniority.
pub fn resolve_permissions(actor: &Actor, resource: &ResourceView) -> CapabilitySet {
    let is_author = actor.id == resource.author_id;
    let editorial = actor.workspace_role.is_editorial();

    let can_edit = match resource.kind {
        ContentKind::Note | ContentKind::Case => {
            editorial
                || (actor.workspace_role == WorkspaceRole::Contributor && is_author)
                || resource.collaborator_ids.contains(&actor.id)
        }
        ContentKind::Guideline => match actor.workspace_role {
            WorkspaceRole::Admin => true,
            WorkspaceRole::Editor => has_required_clinical_role(
                actor.clinical_role,
                actor.resident_year,
                resource.min_edit_clinical_role.unwrap_or(MinClinicalRole::AnyEditor),
            ),
            WorkspaceRole::Contributor | WorkspaceRole::Viewer => false,
        },
    };

    CapabilitySet {
        can_view: true,
        can_edit,
        can_change_status: editorial,
        can_manage_collaborators: editorial || is_author,
        can_submit_for_review: is_author && resource.draft,
    }
}
