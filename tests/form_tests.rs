// Host-side tests for contact form submit phases and case-study lookup.

#![allow(dead_code)]
mod form {
    include!("../src/core/form.rs");
}
mod case_studies {
    include!("../src/core/case_studies.rs");
}

use form::SubmitPhase;

#[test]
fn labels_track_the_phase() {
    assert_eq!(SubmitPhase::Idle.label(), None);
    assert_eq!(SubmitPhase::Sending.label(), Some("Sending..."));
    assert_eq!(SubmitPhase::Sent.label(), Some("Message Sent!"));
    assert_eq!(SubmitPhase::Failed.label(), Some("Failed. Try again"));
    assert_eq!(SubmitPhase::Errored.label(), Some("Error. Try email"));
}

#[test]
fn button_disables_while_sending_and_after_success() {
    assert!(SubmitPhase::Sending.is_disabled());
    assert!(SubmitPhase::Sent.is_disabled());
    assert!(!SubmitPhase::Idle.is_disabled());
    assert!(!SubmitPhase::Failed.is_disabled());
    assert!(!SubmitPhase::Errored.is_disabled());
}

#[test]
fn terminal_phases_revert_and_only_success_clears() {
    for phase in [SubmitPhase::Sent, SubmitPhase::Failed, SubmitPhase::Errored] {
        assert!(phase.reverts());
    }
    assert!(!SubmitPhase::Sending.reverts());
    assert!(SubmitPhase::Sent.clears_form());
    assert!(!SubmitPhase::Failed.clears_form());
}

#[test]
fn response_success_flag_selects_the_phase() {
    assert_eq!(SubmitPhase::on_response(true), SubmitPhase::Sent);
    assert_eq!(SubmitPhase::on_response(false), SubmitPhase::Failed);
}

#[test]
fn case_study_ids_are_unique_and_findable() {
    let mut seen = std::collections::HashSet::new();
    for case in case_studies::CASE_STUDIES {
        assert!(seen.insert(case.id), "duplicate case id {}", case.id);
        let found = case_studies::find(case.id).unwrap();
        assert_eq!(found.title, case.title);
        assert!(!found.highlights.is_empty());
        assert!(!found.actions.is_empty());
    }
    assert!(case_studies::find("nope").is_none());
}

#[test]
fn fields_clear_only_on_the_delayed_revert() {
    // A clearing phase must also be a reverting one: the reset rides the
    // revert timer, and the control stays disabled until it fires.
    for phase in [
        SubmitPhase::Idle,
        SubmitPhase::Sending,
        SubmitPhase::Sent,
        SubmitPhase::Failed,
        SubmitPhase::Errored,
    ] {
        if phase.clears_form() {
            assert!(phase.reverts());
            assert!(phase.is_disabled());
        }
    }
    assert!(!SubmitPhase::Idle.clears_form());
}
