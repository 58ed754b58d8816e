use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Successfully enrolled!");
    let b = state.push(ToastKind::Error, "Failed to enroll");
    assert!(b > a);
    let messages: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["Successfully enrolled!", "Failed to enroll"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    state.dismiss(a);
    let b = state.push(ToastKind::Success, "two");
    assert_ne!(a, b);
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
}
