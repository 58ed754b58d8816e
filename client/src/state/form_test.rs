use super::*;

#[test]
fn second_submit_is_rejected_while_in_flight() {
    let mut form = FormState::default();
    assert!(form.try_begin());
    assert!(form.submitting);
    assert!(!form.try_begin());
}

#[test]
fn success_reenables_and_clears_error() {
    let mut form = FormState::default();
    form.reject("Task name must be at least 5 characters");
    assert!(form.try_begin());
    assert!(form.error.is_none());
    form.succeed();
    assert!(!form.submitting);
    assert!(form.try_begin());
}

#[test]
fn failure_reenables_and_shows_message() {
    let mut form = FormState::default();
    assert!(form.try_begin());
    form.fail("Failed to create task");
    assert!(!form.submitting);
    assert_eq!(form.error.as_deref(), Some("Failed to create task"));
}

#[test]
fn reject_does_not_touch_submitting() {
    let mut form = FormState::default();
    form.reject("Points must be at least 1");
    assert!(!form.submitting);
    form.clear_error();
    assert!(form.error.is_none());
}

#[test]
fn busy_control_does_not_block_its_neighbours() {
    let mut first = FormState::default();
    let mut second = FormState::default();
    assert!(first.try_begin());
    assert!(second.try_begin(), "a second card starts while the first is in flight");
    assert!(!first.try_begin());
    first.fail("Already enrolled");
    assert!(second.submitting);
    assert!(first.error.is_some());
    assert!(second.error.is_none());
}
