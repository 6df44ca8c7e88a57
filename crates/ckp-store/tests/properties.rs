//! Property tests driving the governance engines with random operation
//! sequences and checking the structural invariants that must hold no
//! matter which calls succeed or fail.

use ckp_access::{resolve_permissions, ResourceView};
use ckp_core::{Actor, ContentKind, UserId, WorkspaceId, WorkspaceRole};
use ckp_content::{
    create_content, transition_status, ContentStatus, ContentStore, NewContent, NoteStatus,
};
use ckp_review::{
    assign_reviewer, reopen, submit_for_review, submit_revision, submit_verdict, ReviewStatus,
    Verdict,
};
use ckp_store::MemoryStore;
use proptest::prelude::*;

/// Every operation the workflow exposes over a single note, as a
/// generatable step. Each step is applied with its natural actor and
/// the result may be an error; the invariants below must hold either
/// way.
#[derive(Debug, Clone, Copy)]
enum Step {
    Submit,
    Assign,
    Verdict(Verdict),
    Reopen,
    Revise,
    Transition(NoteStatus),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Submit),
        Just(Step::Assign),
        Just(Step::Verdict(Verdict::Approved)),
        Just(Step::Verdict(Verdict::Rejected)),
        Just(Step::Verdict(Verdict::ChangesRequested)),
        Just(Step::Reopen),
        Just(Step::Revise),
        prop_oneof![
            Just(NoteStatus::Draft),
            Just(NoteStatus::UnderReview),
            Just(NoteStatus::Approved),
            Just(NoteStatus::Published),
            Just(NoteStatus::Archived),
        ]
        .prop_map(Step::Transition),
    ]
}

/// The note's declared edge table plus the verdict-driven jumps the
/// review engine is allowed to make.
fn reachable(from: NoteStatus, to: NoteStatus) -> bool {
    let declared = ContentStatus::Note(from).is_declared_edge(&ContentStatus::Note(to));
    // The review engine sets the verdict mapping directly: Approved on
    // approval, Draft on rejection, UnderReview on submission and
    // resubmission, from whatever state the note is in.
    let review_path = matches!(
        to,
        NoteStatus::Approved | NoteStatus::Draft | NoteStatus::UnderReview
    );
    declared || review_path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_workflow_invariants_hold_under_random_steps(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let ws = WorkspaceId::new();
        let admin = Actor::new(UserId::new(), ws, WorkspaceRole::Admin);
        let author = Actor::new(UserId::new(), ws, WorkspaceRole::Contributor);
        let reviewer = Actor::new(UserId::new(), ws, WorkspaceRole::Contributor);
        let mut store = MemoryStore::new();

        let note = create_content(&mut store, &author, NewContent {
            kind: ContentKind::Note,
            title: "ward note".to_string(),
            body: String::new(),
            min_edit_clinical_role: None,
        }).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let mut audit_len = store.audit_len();
        let mut prev_status = match store.get_content(note.id).map(|c| c.status) {
            Some(ContentStatus::Note(s)) => s,
            _ => return Err(TestCaseError::fail("note missing after create")),
        };

        for step in steps {
            let outcome = match step {
                Step::Submit => submit_for_review(&mut store, &author, note.id).map(|_| ()),
                Step::Assign => match store.requests_for_note(note.id).last() {
                    Some(r) => assign_reviewer(&mut store, &admin, r.id, reviewer.id, None, None).map(|_| ()),
                    None => Ok(()),
                },
                Step::Verdict(v) => match store.requests_for_note(note.id).last() {
                    Some(r) => submit_verdict(&mut store, &reviewer, r.id, v, None).map(|_| ()),
                    None => Ok(()),
                },
                Step::Reopen => match store.requests_for_note(note.id).last() {
                    Some(r) => reopen(&mut store, &admin, r.id).map(|_| ()),
                    None => Ok(()),
                },
                Step::Revise => match store.requests_for_note(note.id).last() {
                    Some(r) => submit_revision(&mut store, &author, r.id, None).map(|_| ()),
                    None => Ok(()),
                },
                Step::Transition(target) => {
                    transition_status(&mut store, &admin, note.id, ContentStatus::Note(target)).map(|_| ())
                }
            };

            // The audit log only ever grows, by at most one entry per call.
            let new_len = store.audit_len();
            prop_assert!(new_len == audit_len || new_len == audit_len + 1);
            audit_len = new_len;

            // A failed call changes no status.
            let status = match store.get_content(note.id).map(|c| c.status) {
                Some(ContentStatus::Note(s)) => s,
                _ => return Err(TestCaseError::fail("note lost its kind")),
            };
            if outcome.is_err() {
                prop_assert_eq!(status, prev_status);
            } else if status != prev_status {
                prop_assert!(reachable(prev_status, status), "{:?} -> {:?}", prev_status, status);
            }
            prev_status = status;

            // At most one open review request per note, always.
            let open = store
                .requests_for_note(note.id)
                .iter()
                .filter(|r| r.status.is_open())
                .count();
            prop_assert!(open <= 1);
        }
    }

    // ── capability resolution invariants ──

    #[test]
    fn prop_editorial_roles_always_hold_governance_capabilities(
        role in prop_oneof![
            Just(WorkspaceRole::Admin),
            Just(WorkspaceRole::Editor),
            Just(WorkspaceRole::Contributor),
            Just(WorkspaceRole::Viewer),
        ],
        kind in prop_oneof![
            Just(ContentKind::Note),
            Just(ContentKind::Case),
            Just(ContentKind::Guideline),
        ],
        draft in any::<bool>(),
    ) {
        let ws = WorkspaceId::new();
        let actor = Actor::new(UserId::new(), ws, role);
        let resource = ResourceView {
            kind,
            author_id: UserId::new(),
            collaborator_ids: Vec::new(),
            min_edit_clinical_role: None,
            draft,
        };
        let caps = resolve_permissions(&actor, &resource);

        prop_assert!(caps.can_view);
        prop_assert_eq!(caps.can_change_status, role.is_editorial());
        // A non-author stranger can only submit nothing.
        prop_assert!(!caps.can_submit_for_review);
    }

    #[test]
    fn prop_author_of_draft_can_always_submit(
        role in prop_oneof![
            Just(WorkspaceRole::Admin),
            Just(WorkspaceRole::Editor),
            Just(WorkspaceRole::Contributor),
            Just(WorkspaceRole::Viewer),
        ],
    ) {
        let ws = WorkspaceId::new();
        let actor = Actor::new(UserId::new(), ws, role);
        let resource = ResourceView {
            kind: ContentKind::Note,
            author_id: actor.id,
            collaborator_ids: Vec::new(),
            min_edit_clinical_role: None,
            draft: true,
        };
        prop_assert!(resolve_permissions(&actor, &resource).can_submit_for_review);
    }
}

// Review status self-check kept out of the proptest block: the open
// states and the verdict states partition the enum.
#[test]
fn test_review_status_partition() {
    use ReviewStatus::*;
    for status in [Pending, InReview, Approved, Rejected, ChangesRequested] {
        assert_ne!(status.is_open(), status.is_verdict());
    }
}
