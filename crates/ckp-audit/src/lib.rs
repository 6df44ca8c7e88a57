//! # ckp-audit — Audit Log Recorder and Event Outbox
//!
//! Append-only observability for the governance core. Every governed
//! operation records exactly one audit entry per logical change; entries
//! are never updated or deleted.
//!
//! ## Architecture
//!
//! - **Entry** (`entry.rs`): the workspace-scoped audit entry with a
//!   store-assigned monotonic sequence.
//! - **Recorder** (`recorder.rs`): the `AuditLog` port (`record`/`list`)
//!   and an in-memory recorder usable as a deterministic test double.
//! - **Outbox** (`outbox.rs`): explicit domain-event emission for
//!   notification-class side effects, so failures are observable and
//!   retryable rather than silently dropped.
//!
//! ## Crate Policy
//!
//! - Depends only on `ckp-core`.
//! - Sequencing is server-assigned and monotonic per store — wall-clock
//!   time alone does not order entries that share a timestamp.

pub mod entry;
pub mod outbox;
pub mod recorder;

pub use entry::{AuditEntry, AuditRecord};
pub use outbox::{DomainEvent, MemoryOutbox, Outbox};
pub use recorder::{AuditLog, AuditPage, MemoryAuditLog};
