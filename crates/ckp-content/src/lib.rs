//! # ckp-content — Content Lifecycle Governance
//!
//! The per-type status state machines and the governed operations that
//! drive them, plus the case collaborator registry.
//!
//! ## Architecture
//!
//! - **Status** (`status.rs`): `NoteStatus`, `CaseStatus`,
//!   `GuidelineStatus`, and the `ContentStatus` tagged union with the
//!   declared-edge tables.
//! - **Item** (`item.rs`): the `ContentItem` entity and `ContentEdit`.
//! - **Store** (`store.rs`): repository ports for content items and
//!   collaborators, and the delete cascade hook.
//! - **Lifecycle** (`lifecycle.rs`): create, transition, edit, delete —
//!   each authorized through `ckp-access` and audited through
//!   `ckp-audit`, exactly one entry per logical change.
//! - **Collaborator** (`collaborator.rs`): add/remove of ad-hoc case
//!   editors.
//!
//! ## Crate Policy
//!
//! - The review workflow composes this crate's transition logic via
//!   [`lifecycle::apply_review_transition`]; it never re-declares the
//!   note table.
//! - Validation precedes every write; a returned error implies no
//!   mutation happened.

pub mod collaborator;
pub mod item;
pub mod lifecycle;
pub mod status;
pub mod store;

pub use collaborator::{add_collaborator, remove_collaborator, Collaborator};
pub use item::{ContentEdit, ContentItem};
pub use lifecycle::{
    apply_review_transition, create_content, delete_content, edit_content, transition_status,
    NewContent,
};
pub use status::{CaseStatus, ContentStatus, GuidelineStatus, NoteStatus};
pub use store::{CollaboratorStore, ContentCascade, ContentStore};
