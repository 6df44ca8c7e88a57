//! # Collaborator Registry
//!
//! Ad-hoc additional editors for structured cases. The case author is
//! implicit and never stored as a collaborator; membership here feeds
//! directly into the permission resolver's edit rule.

use serde::{Deserialize, Serialize};
use tracing::info;

use ckp_access::resolve_permissions;
use ckp_audit::{AuditLog, AuditRecord, DomainEvent, Outbox};
use ckp_core::{Actor, ContentId, ContentKind, GovernanceError, Timestamp, UserId};

use crate::lifecycle::{fetch_scoped, resource_view};
use crate::store::{CollaboratorStore, ContentStore};

/// One case collaborator row, unique per `(case_id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    /// The case this collaborator belongs to.
    pub case_id: ContentId,
    /// The collaborating user.
    pub user_id: UserId,
    /// Who granted the collaboration.
    pub added_by: UserId,
    /// When the collaboration was granted (UTC).
    pub added_at: Timestamp,
}

/// Add a collaborator to a case.
///
/// Requires `can_manage_collaborators`. Adding the author or an existing
/// collaborator is a `Conflict`; the storage adapter enforces the
/// `(case_id, user_id)` uniqueness as well, closing the race window
/// between two concurrent adds.
pub fn add_collaborator<S>(
    store: &mut S,
    actor: &Actor,
    case_id: ContentId,
    user_id: UserId,
) -> Result<Collaborator, GovernanceError>
where
    S: ContentStore + CollaboratorStore + AuditLog + Outbox,
{
    let case = fetch_scoped(store, actor, case_id)?;
    if case.kind() != ContentKind::Case {
        return Err(GovernanceError::Validation(format!(
            "collaborators apply to cases, not {}",
            case.kind()
        )));
    }
    let caps = resolve_permissions(actor, &resource_view(store, &case));
    if !caps.can_manage_collaborators {
        return Err(GovernanceError::unauthorized(
            "add_collaborator",
            "can_manage_collaborators",
        ));
    }
    if user_id == case.author_id {
        return Err(GovernanceError::Conflict(
            "the case author is an implicit collaborator".to_string(),
        ));
    }

    let collaborator = Collaborator {
        case_id,
        user_id,
        added_by: actor.id,
        added_at: Timestamp::now(),
    };
    store.insert_collaborator(collaborator.clone())?;
    store.record(
        AuditRecord::new(
            case.workspace_id,
            Some(actor.id),
            "collaborator.added",
            "collaborator",
            Some(case_id.to_string()),
        )
        .with_metadata(serde_json::json!({ "user": user_id.to_string() })),
    );
    store.publish(DomainEvent::new(
        case.workspace_id,
        "collaborator.added",
        serde_json::json!({ "case": case_id.to_string(), "user": user_id.to_string() }),
    ));
    info!(case = %case_id, user = %user_id, "collaborator added");
    Ok(collaborator)
}

/// Remove a collaborator from a case.
///
/// Requires `can_manage_collaborators`. Removing a user who is not a
/// collaborator is a successful no-op and writes no audit entry; the
/// return value reports whether a row was removed.
pub fn remove_collaborator<S>(
    store: &mut S,
    actor: &Actor,
    case_id: ContentId,
    user_id: UserId,
) -> Result<bool, GovernanceError>
where
    S: ContentStore + CollaboratorStore + AuditLog,
{
    let case = fetch_scoped(store, actor, case_id)?;
    if case.kind() != ContentKind::Case {
        return Err(GovernanceError::Validation(format!(
            "collaborators apply to cases, not {}",
            case.kind()
        )));
    }
    let caps = resolve_permissions(actor, &resource_view(store, &case));
    if !caps.can_manage_collaborators {
        return Err(GovernanceError::unauthorized(
            "remove_collaborator",
            "can_manage_collaborators",
        ));
    }

    let removed = store.delete_collaborator(case_id, user_id);
    if removed {
        store.record(
            AuditRecord::new(
                case.workspace_id,
                Some(actor.id),
                "collaborator.removed",
                "collaborator",
                Some(case_id.to_string()),
            )
            .with_metadata(serde_json::json!({ "user": user_id.to_string() })),
        );
        info!(case = %case_id, user = %user_id, "collaborator removed");
    }
    Ok(removed)
}
