//! # Content Item
//!
//! The governed entity shared by notes, cases, and guidelines. The kind
//! is derived from the status variant; `version` counts content edits,
//! never status changes.

use serde::{Deserialize, Serialize};

use ckp_core::{ContentId, ContentKind, MinClinicalRole, Timestamp, UserId, WorkspaceId};

use crate::status::ContentStatus;

/// A clinical note, structured case, or guideline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique content identifier.
    pub id: ContentId,
    /// The owning workspace.
    pub workspace_id: WorkspaceId,
    /// The original author.
    pub author_id: UserId,
    /// Title line.
    pub title: String,
    /// Body text (markdown; rendering is a presentation concern).
    pub body: String,
    /// Current status; also determines the content kind.
    pub status: ContentStatus,
    /// Edit counter. Starts at 1 and increments on every content edit.
    pub version: u32,
    /// Clinical seniority threshold for edits (guidelines only).
    pub min_edit_clinical_role: Option<MinClinicalRole>,
    /// When the item was created (UTC).
    pub created_at: Timestamp,
    /// When the item was last edited (UTC).
    pub updated_at: Timestamp,
    /// When the item first went live (published/active), if ever.
    pub published_at: Option<Timestamp>,
}

impl ContentItem {
    /// Create a new item in its kind's draft status.
    pub fn new_draft(
        kind: ContentKind,
        workspace_id: WorkspaceId,
        author_id: UserId,
        title: String,
        body: String,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: ContentId::new(),
            workspace_id,
            author_id,
            title,
            body,
            status: ContentStatus::draft_of(kind),
            version: 1,
            min_edit_clinical_role: None,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    /// The content kind, derived from the status.
    pub fn kind(&self) -> ContentKind {
        self.status.kind()
    }
}

/// A partial edit to a content item's fields.
///
/// At least one field must be present; an empty edit is rejected before
/// any write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentEdit {
    /// Replacement title, if changing.
    pub title: Option<String>,
    /// Replacement body, if changing.
    pub body: Option<String>,
}

impl ContentEdit {
    /// Whether the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}
