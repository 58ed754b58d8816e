use super::*;

#[test]
fn extract_detail_reads_plain_string() {
    assert_eq!(
        extract_detail(r#"{"detail": "Subject code already exists"}"#),
        Some("Subject code already exists".to_owned())
    );
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail": [
        {"loc": ["body", "credits"], "msg": "value is not a valid integer", "type": "type_error"},
        {"loc": ["body", "code"], "msg": "field required", "type": "value_error"}
    ]}"#;
    assert_eq!(
        extract_detail(body),
        Some("value is not a valid integer; field required".to_owned())
    );
}

#[test]
fn extract_detail_ignores_unusable_bodies() {
    assert_eq!(extract_detail(""), None);
    assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
    assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
    assert_eq!(extract_detail(r#"{"detail": "   "}"#), None);
    assert_eq!(extract_detail(r#"{"detail": []}"#), None);
    assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
}

#[test]
fn from_response_marks_401_as_unauthorized() {
    let err = ApiError::from_response(401, r#"{"detail": "Could not validate credentials"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed"), "Could not validate credentials");
}

#[test]
fn from_response_keeps_status_and_detail() {
    let err = ApiError::from_response(403, r#"{"detail": "Only teachers can access this"}"#);
    assert!(!err.is_unauthorized());
    assert_eq!(
        err,
        ApiError::Status { status: 403, detail: Some("Only teachers can access this".to_owned()) }
    );
}

#[test]
fn user_message_falls_back_without_detail() {
    assert_eq!(ApiError::from_response(500, "").user_message("Failed to enroll"), "Failed to enroll");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).user_message("Failed to create subject"),
        "Failed to create subject"
    );
    assert_eq!(
        ApiError::Decode("missing field `id`".to_owned()).user_message("Failed to load tasks"),
        "Failed to load tasks"
    );
    assert_eq!(ApiError::Unauthorized { detail: None }.user_message("Login failed"), "Login failed");
}
