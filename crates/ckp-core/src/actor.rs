//! # Actor Descriptor
//!
//! The resolved caller identity supplied by the identity layer on every
//! governed operation. The core trusts this descriptor and never
//! authenticates it — authentication and workspace-membership lookup are
//! the identity provider's concern.

use serde::{Deserialize, Serialize};

use crate::identity::{UserId, WorkspaceId};
use crate::roles::{ClinicalRole, WorkspaceRole};

/// A workspace member performing a governed operation.
///
/// Built by the presentation layer from the session identity plus the
/// member record for the workspace the call targets. Operations treat a
/// workspace mismatch between actor and resource as `NotFound`, so a
/// caller can never observe content outside their tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user.
    pub id: UserId,
    /// The workspace this call is scoped to.
    pub workspace_id: WorkspaceId,
    /// The actor's role within that workspace.
    pub workspace_role: WorkspaceRole,
    /// Clinical seniority classification.
    pub clinical_role: ClinicalRole,
    /// Training year, when the clinical role is `Resident`.
    pub resident_year: Option<u8>,
}

impl Actor {
    /// Build an actor with no clinical classification.
    pub fn new(id: UserId, workspace_id: WorkspaceId, workspace_role: WorkspaceRole) -> Self {
        Self {
            id,
            workspace_id,
            workspace_role,
            clinical_role: ClinicalRole::Other,
            resident_year: None,
        }
    }

    /// Set the clinical role, consuming and returning the actor.
    pub fn with_clinical_role(mut self, role: ClinicalRole) -> Self {
        self.clinical_role = role;
        self
    }

    /// Set the resident training year, consuming and returning the actor.
    pub fn with_resident_year(mut self, year: u8) -> Self {
        self.resident_year = Some(year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let actor = Actor::new(UserId::new(), WorkspaceId::new(), WorkspaceRole::Viewer);
        assert_eq!(actor.clinical_role, ClinicalRole::Other);
        assert_eq!(actor.resident_year, None);
    }

    #[test]
    fn test_builder_clinical_fields() {
        let actor = Actor::new(UserId::new(), WorkspaceId::new(), WorkspaceRole::Editor)
            .with_clinical_role(ClinicalRole::Resident)
            .with_resident_year(4);
        assert_eq!(actor.clinical_role, ClinicalRole::Resident);
        assert_eq!(actor.resident_year, Some(4));
    }
}
