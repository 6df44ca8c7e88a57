//! # Error Types — Governance Error Taxonomy
//!
//! The single error type returned by every governed operation in the
//! workspace. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Authorization failures name the operation and the missing capability.
//! - Transition failures include the content kind, current status, and
//!   attempted target.
//! - Validation precedes any write — a returned error implies nothing was
//!   mutated. Only infrastructure failures (store unreachable) are expected
//!   to propagate outside this taxonomy, as fatal errors in the adapter.

use thiserror::Error;

/// Error returned by governed operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// The actor lacks the capability the operation requires.
    #[error("unauthorized: {operation} requires {requirement}")]
    Unauthorized {
        /// The operation that was attempted.
        operation: String,
        /// The capability or role that was missing.
        requirement: String,
    },

    /// The attempted status change is not a declared edge for the kind.
    #[error("invalid {kind} transition: {from} -> {to}")]
    InvalidTransition {
        /// Content kind name.
        kind: String,
        /// Current status name.
        from: String,
        /// Attempted target status name.
        to: String,
    },

    /// The operation collides with existing state — a duplicate open
    /// review request, a duplicate collaborator, or a verdict on a
    /// closed request.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The resource is absent, or lies outside the caller's workspace.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type name (e.g., "content item").
        resource: String,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Malformed input rejected before any write.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GovernanceError {
    /// Shorthand for an authorization failure.
    pub fn unauthorized(operation: &str, requirement: &str) -> Self {
        Self::Unauthorized {
            operation: operation.to_string(),
            requirement: requirement.to_string(),
        }
    }

    /// Shorthand for a missing resource.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GovernanceError::unauthorized("transition_status", "can_change_status");
        assert_eq!(
            err.to_string(),
            "unauthorized: transition_status requires can_change_status"
        );

        let err = GovernanceError::InvalidTransition {
            kind: "NOTE".to_string(),
            from: "DRAFT".to_string(),
            to: "PUBLISHED".to_string(),
        };
        assert_eq!(err.to_string(), "invalid NOTE transition: DRAFT -> PUBLISHED");

        let err = GovernanceError::not_found("content item", "content:123");
        assert_eq!(err.to_string(), "content item not found: content:123");
    }
}
