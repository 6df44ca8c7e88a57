//! # Audit Log Recorder
//!
//! The `AuditLog` port and its in-memory adapter. The port exposes
//! `record` and `list` only — there is no update or delete, and the
//! in-memory adapter offers no way to express one.

use ckp_core::{AuditEntryId, GovernanceError, Timestamp, WorkspaceId};

use crate::entry::{AuditEntry, AuditRecord};

/// One page of a workspace's audit log, newest first.
#[derive(Debug, Clone)]
pub struct AuditPage {
    /// The entries on this page, ordered by `(created_at, seq)` descending.
    pub entries: Vec<AuditEntry>,
    /// The 1-based page number that was requested.
    pub page: usize,
    /// The page size that was requested.
    pub limit: usize,
    /// Total entries for the workspace across all pages.
    pub total: usize,
}

/// Append-only audit log port.
///
/// Adapters must assign a monotonically increasing sequence at append
/// time; consumers rely on `(created_at, seq)` for a stable causal order
/// when entries share a timestamp.
pub trait AuditLog {
    /// Append one entry and return it with its assigned id, sequence,
    /// and timestamp.
    fn record(&mut self, record: AuditRecord) -> AuditEntry;

    /// List a workspace's entries, newest first, with 1-based pagination.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceError::Validation`] when `page` or `limit`
    /// is zero.
    fn list(
        &self,
        workspace_id: WorkspaceId,
        page: usize,
        limit: usize,
    ) -> Result<AuditPage, GovernanceError>;
}

/// In-memory audit log.
///
/// Deterministic test double for the recorder port; also the reference
/// for what a persistent adapter must guarantee (append-only storage,
/// per-store monotonic sequence).
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Vec<AuditEntry>,
    next_seq: u64,
}

impl MemoryAuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries appended so far, across all workspaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AuditLog for MemoryAuditLog {
    fn record(&mut self, record: AuditRecord) -> AuditEntry {
        self.next_seq += 1;
        let entry = AuditEntry {
            id: AuditEntryId::new(),
            workspace_id: record.workspace_id,
            actor_id: record.actor_id,
            action: record.action,
            resource_type: record.resource_type,
            resource_id: record.resource_id,
            metadata: record.metadata,
            seq: self.next_seq,
            created_at: Timestamp::now(),
        };
        self.entries.push(entry.clone());
        entry
    }

    fn list(
        &self,
        workspace_id: WorkspaceId,
        page: usize,
        limit: usize,
    ) -> Result<AuditPage, GovernanceError> {
        if page == 0 {
            return Err(GovernanceError::Validation(
                "audit page numbers are 1-based".to_string(),
            ));
        }
        if limit == 0 {
            return Err(GovernanceError::Validation(
                "audit page limit must be positive".to_string(),
            ));
        }

        let mut scoped: Vec<AuditEntry> = self
            .entries
            .iter()
            .filter(|e| e.workspace_id == workspace_id)
            .cloned()
            .collect();
        // Appends are already seq-ordered; sort keeps the contract
        // explicit for adapters that interleave workspaces.
        scoped.sort_by(|a, b| (b.created_at, b.seq).cmp(&(a.created_at, a.seq)));

        let total = scoped.len();
        let entries = scoped
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();

        Ok(AuditPage {
            entries,
            page,
            limit,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckp_core::UserId;

    fn record(workspace_id: WorkspaceId, action: &str) -> AuditRecord {
        AuditRecord::new(workspace_id, Some(UserId::new()), action, "content_item", None)
    }

    #[test]
    fn test_record_assigns_monotonic_seq() {
        let ws = WorkspaceId::new();
        let mut log = MemoryAuditLog::new();
        let first = log.record(record(ws, "content.created"));
        let second = log.record(record(ws, "content.status_changed"));
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_list_newest_first() {
        let ws = WorkspaceId::new();
        let mut log = MemoryAuditLog::new();
        log.record(record(ws, "first"));
        log.record(record(ws, "second"));
        log.record(record(ws, "third"));

        let page = log.list(ws, 1, 10).unwrap();
        assert_eq!(page.total, 3);
        let actions: Vec<&str> = page.entries.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_list_is_workspace_scoped() {
        let ws_a = WorkspaceId::new();
        let ws_b = WorkspaceId::new();
        let mut log = MemoryAuditLog::new();
        log.record(record(ws_a, "a.only"));
        log.record(record(ws_b, "b.only"));

        let page = log.list(ws_a, 1, 10).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.entries[0].action, "a.only");
    }

    #[test]
    fn test_pagination_windows() {
        let ws = WorkspaceId::new();
        let mut log = MemoryAuditLog::new();
        for i in 0..5 {
            log.record(record(ws, &format!("action.{i}")));
        }

        let first = log.list(ws, 1, 2).unwrap();
        assert_eq!(first.entries.len(), 2);
        assert_eq!(first.entries[0].action, "action.4");

        let last = log.list(ws, 3, 2).unwrap();
        assert_eq!(last.entries.len(), 1);
        assert_eq!(last.entries[0].action, "action.0");

        let beyond = log.list(ws, 4, 2).unwrap();
        assert!(beyond.entries.is_empty());
        assert_eq!(beyond.total, 5);
    }

    #[test]
    fn test_huge_page_numbers_return_empty_pages() {
        let ws = WorkspaceId::new();
        let mut log = MemoryAuditLog::new();
        log.record(record(ws, "content.created"));

        let page = log.list(ws, usize::MAX, usize::MAX).unwrap();
        assert!(page.entries.is_empty());
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_zero_page_or_limit_rejected() {
        let ws = WorkspaceId::new();
        let log = MemoryAuditLog::new();
        assert!(matches!(
            log.list(ws, 0, 10),
            Err(GovernanceError::Validation(_))
        ));
        assert!(matches!(
            log.list(ws, 1, 0),
            Err(GovernanceError::Validation(_))
        ));
    }
}
