//! # In-Memory Store
//!
//! `BTreeMap`-backed adapter for every port. Iteration order is
//! deterministic, which keeps test failures reproducible.

use std::collections::BTreeMap;

use ckp_audit::{
    AuditEntry, AuditLog, AuditPage, AuditRecord, DomainEvent, MemoryAuditLog, MemoryOutbox,
    Outbox,
};
use ckp_core::{
    ContentId, GovernanceError, ReviewActionId, ReviewRequestId, Timestamp, UserId, WorkspaceId,
};
use ckp_content::{Collaborator, CollaboratorStore, ContentCascade, ContentItem, ContentStore};
use ckp_review::{NewReviewAction, ReviewAction, ReviewRequest, ReviewStore};

/// In-memory implementation of every storage port in the workspace.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: BTreeMap<ContentId, ContentItem>,
    collaborators: BTreeMap<(ContentId, UserId), Collaborator>,
    requests: BTreeMap<ReviewRequestId, ReviewRequest>,
    actions: Vec<ReviewAction>,
    next_action_seq: u64,
    audit: MemoryAuditLog,
    outbox: MemoryOutbox,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every review request ever stored for a note, open and closed.
    pub fn requests_for_note(&self, note_id: ContentId) -> Vec<ReviewRequest> {
        self.requests
            .values()
            .filter(|r| r.note_id == note_id)
            .cloned()
            .collect()
    }

    /// Total audit entries appended, across all workspaces.
    pub fn audit_len(&self) -> usize {
        self.audit.len()
    }

    /// Total review actions appended.
    pub fn action_len(&self) -> usize {
        self.actions.len()
    }

    /// Events published and not yet drained, oldest first.
    pub fn pending_events(&self) -> &[DomainEvent] {
        self.outbox.events()
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        self.outbox.drain()
    }
}

// ─── Content ─────────────────────────────────────────────────────────

impl ContentStore for MemoryStore {
    fn get_content(&self, id: ContentId) -> Option<ContentItem> {
        self.contents.get(&id).cloned()
    }

    fn put_content(&mut self, item: ContentItem) {
        self.contents.insert(item.id, item);
    }

    fn remove_content(&mut self, id: ContentId) -> Option<ContentItem> {
        self.contents.remove(&id)
    }
}

impl CollaboratorStore for MemoryStore {
    fn collaborators_for(&self, case_id: ContentId) -> Vec<UserId> {
        self.collaborators
            .values()
            .filter(|c| c.case_id == case_id)
            .map(|c| c.user_id)
            .collect()
    }

    fn insert_collaborator(&mut self, collaborator: Collaborator) -> Result<(), GovernanceError> {
        let key = (collaborator.case_id, collaborator.user_id);
        if self.collaborators.contains_key(&key) {
            return Err(GovernanceError::Conflict(format!(
                "{} is already a collaborator on {}",
                collaborator.user_id, collaborator.case_id
            )));
        }
        self.collaborators.insert(key, collaborator);
        Ok(())
    }

    fn delete_collaborator(&mut self, case_id: ContentId, user_id: UserId) -> bool {
        self.collaborators.remove(&(case_id, user_id)).is_some()
    }

    fn purge_collaborators(&mut self, case_id: ContentId) {
        self.collaborators.retain(|(id, _), _| *id != case_id);
    }
}

impl ContentCascade for MemoryStore {
    fn purge_dependents(&mut self, content_id: ContentId) {
        self.purge_requests_for(content_id);
    }
}

// ─── Review ──────────────────────────────────────────────────────────

impl ReviewStore for MemoryStore {
    fn get_request(&self, id: ReviewRequestId) -> Option<ReviewRequest> {
        self.requests.get(&id).cloned()
    }

    fn open_request_for(&self, note_id: ContentId) -> Option<ReviewRequest> {
        self.requests
            .values()
            .find(|r| r.note_id == note_id && r.is_open())
            .cloned()
    }

    fn insert_open_request(&mut self, request: ReviewRequest) -> Result<(), GovernanceError> {
        if let Some(open) = self.open_request_for(request.note_id) {
            return Err(GovernanceError::Conflict(format!(
                "note {} already has an open review request ({})",
                request.note_id, open.id
            )));
        }
        self.requests.insert(request.id, request);
        Ok(())
    }

    fn put_request(&mut self, request: ReviewRequest) -> Result<(), GovernanceError> {
        if request.is_open() {
            if let Some(open) = self.open_request_for(request.note_id) {
                if open.id != request.id {
                    return Err(GovernanceError::Conflict(format!(
                        "note {} already has an open review request ({})",
                        request.note_id, open.id
                    )));
                }
            }
        }
        self.requests.insert(request.id, request);
        Ok(())
    }

    fn append_action(&mut self, action: NewReviewAction) -> ReviewAction {
        self.next_action_seq += 1;
        let appended = ReviewAction {
            id: ReviewActionId::new(),
            review_request_id: action.review_request_id,
            workspace_id: action.workspace_id,
            actor_id: action.actor_id,
            kind: action.kind,
            note: action.note,
            seq: self.next_action_seq,
            created_at: Timestamp::now(),
        };
        self.actions.push(appended.clone());
        appended
    }

    fn actions_for(&self, request_id: ReviewRequestId) -> Vec<ReviewAction> {
        self.actions
            .iter()
            .filter(|a| a.review_request_id == request_id)
            .cloned()
            .collect()
    }

    fn purge_requests_for(&mut self, note_id: ContentId) {
        self.requests.retain(|_, r| r.note_id != note_id);
    }
}

// ─── Audit and Outbox ────────────────────────────────────────────────

impl AuditLog for MemoryStore {
    fn record(&mut self, record: AuditRecord) -> AuditEntry {
        self.audit.record(record)
    }

    fn list(
        &self,
        workspace_id: WorkspaceId,
        page: usize,
        limit: usize,
    ) -> Result<AuditPage, GovernanceError> {
        self.audit.list(workspace_id, page, limit)
    }
}

impl Outbox for MemoryStore {
    fn publish(&mut self, event: DomainEvent) {
        self.outbox.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckp_core::ContentKind;

    fn draft_note(workspace_id: WorkspaceId, author_id: UserId) -> ContentItem {
        ContentItem::new_draft(
            ContentKind::Note,
            workspace_id,
            author_id,
            "Test note".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_open_request_uniqueness_at_insert() {
        let mut store = MemoryStore::new();
        let ws = WorkspaceId::new();
        let author = UserId::new();
        let note = draft_note(ws, author);
        let note_id = note.id;
        store.put_content(note);

        let first = ReviewRequest::new_pending(ws, note_id, author);
        store.insert_open_request(first).unwrap();

        let second = ReviewRequest::new_pending(ws, note_id, author);
        assert!(matches!(
            store.insert_open_request(second),
            Err(GovernanceError::Conflict(_))
        ));
        assert_eq!(store.requests_for_note(note_id).len(), 1);
    }

    #[test]
    fn test_put_request_blocks_second_open_on_reopen() {
        let mut store = MemoryStore::new();
        let ws = WorkspaceId::new();
        let author = UserId::new();
        let note_id = ContentId::new();

        let mut closed = ReviewRequest::new_pending(ws, note_id, author);
        closed.status = ckp_review::ReviewStatus::Rejected;
        store.put_request(closed.clone()).unwrap();

        let open = ReviewRequest::new_pending(ws, note_id, author);
        store.insert_open_request(open).unwrap();

        // Flipping the closed request back open would break uniqueness.
        closed.status = ckp_review::ReviewStatus::Pending;
        assert!(matches!(
            store.put_request(closed),
            Err(GovernanceError::Conflict(_))
        ));
    }

    #[test]
    fn test_action_seq_is_monotonic() {
        let mut store = MemoryStore::new();
        let ws = WorkspaceId::new();
        let request_id = ReviewRequestId::new();
        let actor = UserId::new();

        let first = store.append_action(NewReviewAction {
            review_request_id: request_id,
            workspace_id: ws,
            actor_id: actor,
            kind: ckp_review::ReviewActionKind::Submitted,
            note: None,
        });
        let second = store.append_action(NewReviewAction {
            review_request_id: request_id,
            workspace_id: ws,
            actor_id: actor,
            kind: ckp_review::ReviewActionKind::CommentAdded,
            note: Some("looks fine".to_string()),
        });
        assert!(second.seq > first.seq);
        assert_eq!(store.actions_for(request_id).len(), 2);
    }

    #[test]
    fn test_collaborator_uniqueness_and_case_scoping() {
        let mut store = MemoryStore::new();
        let case_id = ContentId::new();
        let other_case = ContentId::new();
        let user = UserId::new();
        let added_by = UserId::new();

        let row = Collaborator {
            case_id,
            user_id: user,
            added_by,
            added_at: Timestamp::now(),
        };
        store.insert_collaborator(row.clone()).unwrap();
        assert!(store.insert_collaborator(row).is_err());

        store
            .insert_collaborator(Collaborator {
                case_id: other_case,
                user_id: user,
                added_by,
                added_at: Timestamp::now(),
            })
            .unwrap();

        assert_eq!(store.collaborators_for(case_id), vec![user]);
        assert!(store.delete_collaborator(case_id, user));
        assert!(!store.delete_collaborator(case_id, user));
        assert_eq!(store.collaborators_for(other_case), vec![user]);
    }

    #[test]
    fn test_purge_requests_keeps_actions() {
        let mut store = MemoryStore::new();
        let ws = WorkspaceId::new();
        let note_id = ContentId::new();
        let request = ReviewRequest::new_pending(ws, note_id, UserId::new());
        let request_id = request.id;
        store.insert_open_request(request).unwrap();
        store.append_action(NewReviewAction {
            review_request_id: request_id,
            workspace_id: ws,
            actor_id: UserId::new(),
            kind: ckp_review::ReviewActionKind::Submitted,
            note: None,
        });

        store.purge_requests_for(note_id);
        assert!(store.get_request(request_id).is_none());
        // The action history outlives the request row.
        assert_eq!(store.actions_for(request_id).len(), 1);
    }
}
