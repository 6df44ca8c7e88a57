//! # ckp-core — Foundational Types for the Governance Core
//!
//! This crate is the bedrock of the clinical knowledge platform governance
//! core. Every other crate in the workspace depends on `ckp-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `WorkspaceId`, `UserId`,
//!    `ContentId`, `ReviewRequestId` — all newtypes over UUIDs. No bare
//!    strings or raw UUIDs for identifiers, so a case id can never be passed
//!    where a user id is expected.
//!
//! 2. **Closed role enums.** `WorkspaceRole`, `ClinicalRole`, and
//!    `MinClinicalRole` are exhaustively matched everywhere. Adding a role
//!    forces every consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision, so audit ordering never depends on local offsets.
//!
//! 4. **Typed error taxonomy.** Every governed operation in the workspace
//!    returns `Result<_, GovernanceError>` — presentation layers render
//!    inline messages without exception handling.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ckp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod actor;
pub mod error;
pub mod identity;
pub mod roles;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use actor::Actor;
pub use error::GovernanceError;
pub use identity::{
    AuditEntryId, ContentId, ReviewActionId, ReviewRequestId, UserId, WorkspaceId,
};
pub use roles::{ClinicalRole, ContentKind, MinClinicalRole, WorkspaceRole};
pub use temporal::Timestamp;
