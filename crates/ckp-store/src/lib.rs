//! # ckp-store — In-Memory Storage Adapter
//!
//! One adapter implementing every repository port in the workspace:
//! content items, collaborators, review cycles, the audit log, and the
//! event outbox. It is the deterministic test double for the governance
//! core and the reference for what a persistent adapter must guarantee:
//!
//! - at most one open review request per note, enforced at insert and at
//!   every closed-to-open flip;
//! - monotonic sequences on review actions and audit entries;
//! - append-only action and audit histories.
//!
//! Because the engines take a single `&mut` store per operation, every
//! governed operation is atomic here by construction. A transactional
//! adapter (e.g., SQLx over Postgres) would wrap the same port calls in
//! one transaction and express the uniqueness as a partial unique index.

pub mod memory;

pub use memory::MemoryStore;
