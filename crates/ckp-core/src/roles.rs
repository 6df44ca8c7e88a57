//! # Role and Kind Enums
//!
//! Closed enums for workspace roles, clinical seniority, guideline edit
//! thresholds, and content kinds. All four are exhaustively matched by
//! their consumers — adding a variant is a compile-time event across the
//! workspace, never a silently unhandled string.

use serde::{Deserialize, Serialize};

// ─── Workspace Role ──────────────────────────────────────────────────

/// Workspace-level permission tier. One role per user per workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    /// Full control over the workspace, including destructive operations.
    Admin,
    /// May edit any note or case and drive status changes and reviews.
    Editor,
    /// May author content and edit their own notes and cases.
    Contributor,
    /// Read-only access to workspace content.
    Viewer,
}

impl WorkspaceRole {
    /// Whether this role sits in the editorial tier (admin or editor).
    ///
    /// The editorial tier gates status changes, reviewer assignment, and
    /// review reopening.
    pub fn is_editorial(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }
}

impl std::fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Contributor => "CONTRIBUTOR",
            Self::Viewer => "VIEWER",
        };
        f.write_str(s)
    }
}

// ─── Clinical Role ───────────────────────────────────────────────────

/// Clinical seniority classification, independent of workspace role.
///
/// Used only to gate guideline edits. A resident's training year is
/// carried separately on the actor descriptor because it only matters
/// for the `R3ResidentPlus` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalRole {
    /// Attending consultant.
    Consultant,
    /// Senior registrar.
    SeniorRegistrar,
    /// Resident in training; seniority depends on training year.
    Resident,
    /// Any non-clinical or unclassified staff member.
    Other,
}

impl std::fmt::Display for ClinicalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Consultant => "CONSULTANT",
            Self::SeniorRegistrar => "SENIOR_REGISTRAR",
            Self::Resident => "RESIDENT",
            Self::Other => "OTHER",
        };
        f.write_str(s)
    }
}

// ─── Minimum Clinical Role ───────────────────────────────────────────

/// Guideline edit threshold: the minimum clinical seniority an editor
/// must hold to edit a given guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinClinicalRole {
    /// Any clinical role satisfies the threshold.
    AnyEditor,
    /// Residents in year 3 or later, senior registrars, and consultants.
    R3ResidentPlus,
    /// Senior registrars and consultants.
    SeniorRegistrar,
    /// Consultants only.
    ConsultantOnly,
}

impl std::fmt::Display for MinClinicalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AnyEditor => "ANY_EDITOR",
            Self::R3ResidentPlus => "R3_RESIDENT_PLUS",
            Self::SeniorRegistrar => "SENIOR_REGISTRAR",
            Self::ConsultantOnly => "CONSULTANT_ONLY",
        };
        f.write_str(s)
    }
}

// ─── Content Kind ────────────────────────────────────────────────────

/// The three governed content types.
///
/// Each kind carries its own status enum and transition table; the kind
/// of a content item is derived from its status variant and can never
/// disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Free-form clinical note; the only kind subject to peer review.
    Note,
    /// Structured clinical case; supports ad-hoc collaborators.
    Case,
    /// Clinical guideline; edits gated by clinical seniority.
    Guideline,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Note => "NOTE",
            Self::Case => "CASE",
            Self::Guideline => "GUIDELINE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editorial_tier() {
        assert!(WorkspaceRole::Admin.is_editorial());
        assert!(WorkspaceRole::Editor.is_editorial());
        assert!(!WorkspaceRole::Contributor.is_editorial());
        assert!(!WorkspaceRole::Viewer.is_editorial());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(WorkspaceRole::Admin.to_string(), "ADMIN");
        assert_eq!(ClinicalRole::SeniorRegistrar.to_string(), "SENIOR_REGISTRAR");
        assert_eq!(MinClinicalRole::R3ResidentPlus.to_string(), "R3_RESIDENT_PLUS");
        assert_eq!(ContentKind::Guideline.to_string(), "GUIDELINE");
    }

    #[test]
    fn test_snake_case_serde() {
        let json = serde_json::to_string(&WorkspaceRole::Contributor).unwrap();
        assert_eq!(json, "\"contributor\"");
        let json = serde_json::to_string(&MinClinicalRole::ConsultantOnly).unwrap();
        assert_eq!(json, "\"consultant_only\"");
        let parsed: ClinicalRole = serde_json::from_str("\"senior_registrar\"").unwrap();
        assert_eq!(parsed, ClinicalRole::SeniorRegistrar);
    }
}
