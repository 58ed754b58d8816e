use super::*;
use crate::net::types::User;

fn user(is_teacher: bool) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@test.com".to_owned(),
        is_teacher,
        created_at: None,
    }
}

#[test]
fn guard_waits_while_restoring() {
    assert_eq!(guard_decision(&AuthState::restoring(), None), GuardDecision::Wait);
    assert_eq!(guard_decision(&AuthState::restoring(), Some(Role::Teacher)), GuardDecision::Wait);
}

#[test]
fn guard_sends_anonymous_users_to_login() {
    assert_eq!(guard_decision(&AuthState::signed_out(), None), GuardDecision::Redirect("/login"));
    assert_eq!(
        guard_decision(&AuthState::signed_out(), Some(Role::Student)),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn guard_renders_matching_area() {
    let teacher = AuthState::signed_in(user(true), "tok".to_owned());
    assert_eq!(guard_decision(&teacher, Some(Role::Teacher)), GuardDecision::Render);
    assert_eq!(guard_decision(&teacher, None), GuardDecision::Render);
}

#[test]
fn guard_sends_wrong_area_to_own_dashboard() {
    let student = AuthState::signed_in(user(false), "tok".to_owned());
    assert_eq!(guard_decision(&student, Some(Role::Teacher)), GuardDecision::Redirect("/student"));

    let teacher = AuthState::signed_in(user(true), "tok".to_owned());
    assert_eq!(guard_decision(&teacher, Some(Role::Student)), GuardDecision::Redirect("/teacher"));
}

#[test]
fn dashboard_redirect_follows_role() {
    assert_eq!(dashboard_redirect(&AuthState::restoring()), None);
    assert_eq!(dashboard_redirect(&AuthState::signed_out()), Some("/login"));
    assert_eq!(
        dashboard_redirect(&AuthState::signed_in(user(true), "t".to_owned())),
        Some("/teacher")
    );
    assert_eq!(
        dashboard_redirect(&AuthState::signed_in(user(false), "t".to_owned())),
        Some("/student")
    );
}
