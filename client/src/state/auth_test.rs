use super::*;

fn teacher() -> User {
    User {
        id: 1,
        username: "teacher1".to_owned(),
        email: "teacher1@test.com".to_owned(),
        is_teacher: true,
        created_at: None,
    }
}

#[test]
fn default_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn restoring_is_loading_without_user() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn signed_in_exposes_role() {
    let state = AuthState::signed_in(teacher(), "tok".to_owned());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Teacher));
}

#[test]
fn absorb_error_clears_session_on_unauthorized() {
    let mut state = AuthState::signed_in(teacher(), "tok".to_owned());
    let cleared = state.absorb_error(&ApiError::Unauthorized { detail: None });
    assert!(cleared);
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn absorb_error_keeps_session_on_other_failures() {
    let mut state = AuthState::signed_in(teacher(), "tok".to_owned());
    let forbidden = ApiError::Status { status: 403, detail: Some("Forbidden".to_owned()) };
    assert!(!state.absorb_error(&forbidden));
    assert!(!state.absorb_error(&ApiError::Network("offline".to_owned())));
    assert!(state.is_authenticated());
}

#[test]
fn restore_failed_on_unauthorized_ends_without_notice() {
    let state = AuthState::restore_failed(&ApiError::Unauthorized { detail: None });
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn restore_failed_on_outage_keeps_message_and_stops_loading() {
    let upstream_down = ApiError::Status { status: 502, detail: Some("LMS API is unavailable".to_owned()) };
    let state = AuthState::restore_failed(&upstream_down);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.notice.as_deref(), Some("LMS API is unavailable"));

    let offline = AuthState::restore_failed(&ApiError::Network("connection refused".to_owned()));
    assert_eq!(offline.notice.as_deref(), Some(RESTORE_FAILED_MESSAGE));
}

#[test]
fn only_unauthorized_discards_the_stored_token() {
    assert!(ApiError::Unauthorized { detail: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 502, detail: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 504, detail: None }.is_unauthorized());
    assert!(!ApiError::Network("timeout".to_owned()).is_unauthorized());
}
