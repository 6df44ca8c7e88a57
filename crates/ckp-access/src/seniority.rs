//! # Clinical Seniority Ordering
//!
//! Defines the ordinal ranking over clinical roles and the threshold
//! check that gates guideline edits.
//!
//! ## Ordering
//!
//! ```text
//! Other < Resident(year) < SeniorRegistrar < Consultant
//! ```
//!
//! A resident's effective rank against the `R3ResidentPlus` threshold
//! additionally requires `resident_year >= 3`. A resident with no
//! recorded training year never satisfies that threshold.

use ckp_core::{ClinicalRole, MinClinicalRole};

/// Whether a clinical role (with optional resident year) satisfies a
/// guideline edit threshold.
///
/// Pure and total: every input produces a definite boolean, never an
/// error. Any combination not explicitly satisfying its threshold is
/// `false`.
pub fn has_required_clinical_role(
    role: ClinicalRole,
    resident_year: Option<u8>,
    minimum: MinClinicalRole,
) -> bool {
    match minimum {
        MinClinicalRole::AnyEditor => true,
        MinClinicalRole::R3ResidentPlus => match role {
            ClinicalRole::Consultant | ClinicalRole::SeniorRegistrar => true,
            ClinicalRole::Resident => resident_year.is_some_and(|year| year >= 3),
            ClinicalRole::Other => false,
        },
        MinClinicalRole::SeniorRegistrar => {
            matches!(role, ClinicalRole::Consultant | ClinicalRole::SeniorRegistrar)
        }
        MinClinicalRole::ConsultantOnly => matches!(role, ClinicalRole::Consultant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_any_editor_accepts_everyone() {
        for role in [
            ClinicalRole::Consultant,
            ClinicalRole::SeniorRegistrar,
            ClinicalRole::Resident,
            ClinicalRole::Other,
        ] {
            assert!(has_required_clinical_role(role, None, MinClinicalRole::AnyEditor));
        }
    }

    #[test]
    fn test_r3_resident_plus_year_boundary() {
        let min = MinClinicalRole::R3ResidentPlus;
        assert!(!has_required_clinical_role(ClinicalRole::Resident, Some(2), min));
        assert!(has_required_clinical_role(ClinicalRole::Resident, Some(3), min));
        assert!(has_required_clinical_role(ClinicalRole::Resident, Some(4), min));
        // A resident with no recorded year never clears the bar.
        assert!(!has_required_clinical_role(ClinicalRole::Resident, None, min));
    }

    #[test]
    fn test_r3_resident_plus_senior_roles() {
        let min = MinClinicalRole::R3ResidentPlus;
        assert!(has_required_clinical_role(ClinicalRole::Consultant, None, min));
        assert!(has_required_clinical_role(ClinicalRole::SeniorRegistrar, None, min));
        assert!(!has_required_clinical_role(ClinicalRole::Other, None, min));
    }

    #[test]
    fn test_senior_registrar_threshold() {
        let min = MinClinicalRole::SeniorRegistrar;
        assert!(has_required_clinical_role(ClinicalRole::Consultant, None, min));
        assert!(has_required_clinical_role(ClinicalRole::SeniorRegistrar, None, min));
        assert!(!has_required_clinical_role(ClinicalRole::Resident, Some(7), min));
        assert!(!has_required_clinical_role(ClinicalRole::Other, None, min));
    }

    #[test]
    fn test_consultant_only_threshold() {
        let min = MinClinicalRole::ConsultantOnly;
        assert!(has_required_clinical_role(ClinicalRole::Consultant, None, min));
        assert!(!has_required_clinical_role(ClinicalRole::SeniorRegistrar, None, min));
        assert!(!has_required_clinical_role(ClinicalRole::Resident, Some(6), min));
        assert!(!has_required_clinical_role(ClinicalRole::Other, None, min));
    }

    fn any_role() -> impl Strategy<Value = ClinicalRole> {
        prop_oneof![
            Just(ClinicalRole::Consultant),
            Just(ClinicalRole::SeniorRegistrar),
            Just(ClinicalRole::Resident),
            Just(ClinicalRole::Other),
        ]
    }

    fn any_minimum() -> impl Strategy<Value = MinClinicalRole> {
        prop_oneof![
            Just(MinClinicalRole::AnyEditor),
            Just(MinClinicalRole::R3ResidentPlus),
            Just(MinClinicalRole::SeniorRegistrar),
            Just(MinClinicalRole::ConsultantOnly),
        ]
    }

    proptest! {
        // Raising the threshold can only shrink the set of qualifying
        // actors: anyone clearing ConsultantOnly clears SeniorRegistrar,
        // anyone clearing SeniorRegistrar clears R3ResidentPlus, and
        // everyone clears AnyEditor.
        #[test]
        fn prop_thresholds_are_monotone(role in any_role(), year in proptest::option::of(0u8..10)) {
            if has_required_clinical_role(role, year, MinClinicalRole::ConsultantOnly) {
                prop_assert!(has_required_clinical_role(role, year, MinClinicalRole::SeniorRegistrar));
            }
            if has_required_clinical_role(role, year, MinClinicalRole::SeniorRegistrar) {
                prop_assert!(has_required_clinical_role(role, year, MinClinicalRole::R3ResidentPlus));
            }
            prop_assert!(has_required_clinical_role(role, year, MinClinicalRole::AnyEditor));
        }

        // The resident year is only consulted for residents against
        // R3ResidentPlus; every other combination ignores it.
        #[test]
        fn prop_year_only_matters_for_residents(
            role in any_role(),
            year_a in proptest::option::of(0u8..10),
            year_b in proptest::option::of(0u8..10),
            min in any_minimum(),
        ) {
            let year_sensitive =
                role == ClinicalRole::Resident && min == MinClinicalRole::R3ResidentPlus;
            if !year_sensitive {
                prop_assert_eq!(
                    has_required_clinical_role(role, year_a, min),
                    has_required_clinical_role(role, year_b, min)
                );
            }
        }
    }
}
