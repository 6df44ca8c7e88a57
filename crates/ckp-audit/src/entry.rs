//! # Audit Entry
//!
//! The immutable record of one logical change. A verdict submission is
//! one entry even though it touches a review request and a note; a
//! rejected guard writes no entry at all.

use serde::{Deserialize, Serialize};

use ckp_core::{AuditEntryId, Timestamp, UserId, WorkspaceId};

/// What a caller supplies to [`crate::AuditLog::record`].
///
/// Identifier, sequence, and timestamp are assigned by the recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// The workspace the change belongs to.
    pub workspace_id: WorkspaceId,
    /// The acting user; `None` marks a system-initiated change.
    pub actor_id: Option<UserId>,
    /// Namespaced action string (e.g., `content.status_changed`,
    /// `review.verdict_submitted`).
    pub action: String,
    /// Resource type name (e.g., `content_item`, `review_request`).
    pub resource_type: String,
    /// The primary resource the change targeted, if any.
    pub resource_id: Option<String>,
    /// Free-form structured context for the change.
    pub metadata: serde_json::Value,
}

impl AuditRecord {
    /// Build a record with empty metadata.
    pub fn new(
        workspace_id: WorkspaceId,
        actor_id: Option<UserId>,
        action: &str,
        resource_type: &str,
        resource_id: Option<String>,
    ) -> Self {
        Self {
            workspace_id,
            actor_id,
            action: action.to_string(),
            resource_type: resource_type.to_string(),
            resource_id,
            metadata: serde_json::Value::Null,
        }
    }

    /// Attach structured metadata, consuming and returning the record.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// One appended audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identifier.
    pub id: AuditEntryId,
    /// The workspace the change belongs to.
    pub workspace_id: WorkspaceId,
    /// The acting user; `None` marks a system-initiated change.
    pub actor_id: Option<UserId>,
    /// Namespaced action string.
    pub action: String,
    /// Resource type name.
    pub resource_type: String,
    /// The primary resource the change targeted, if any.
    pub resource_id: Option<String>,
    /// Free-form structured context for the change.
    pub metadata: serde_json::Value,
    /// Store-assigned monotonic sequence; breaks ties between entries
    /// sharing a timestamp.
    pub seq: u64,
    /// When the entry was appended (UTC).
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = AuditRecord::new(
            WorkspaceId::new(),
            Some(UserId::new()),
            "content.status_changed",
            "content_item",
            None,
        )
        .with_metadata(serde_json::json!({"from": "DRAFT", "to": "UNDER_REVIEW"}));

        assert_eq!(record.action, "content.status_changed");
        assert_eq!(record.metadata["from"], "DRAFT");
    }
}
