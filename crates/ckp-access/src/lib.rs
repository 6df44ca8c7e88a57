//! # ckp-access — Permission Resolution
//!
//! Pure capability resolution for the governance core. Given an actor
//! descriptor and a resource view, [`resolve_permissions`] computes the
//! capability set that gates every governed operation in the workspace.
//!
//! ## Architecture
//!
//! - **Seniority** (`seniority.rs`): the clinical seniority ordering and
//!   the threshold check used for guideline edits.
//! - **Resolver** (`resolver.rs`): the capability-set computation
//!   combining workspace role, resource authorship, ad-hoc collaborators,
//!   and the seniority check.
//!
//! ## Crate Policy
//!
//! - Depends only on `ckp-core`. No ports, no storage — both public
//!   functions are pure and total, so callers can evaluate them against
//!   any snapshot of state without a transaction.

pub mod resolver;
pub mod seniority;

pub use resolver::{resolve_permissions, CapabilitySet, ResourceView};
pub use seniority::has_required_clinical_role;
