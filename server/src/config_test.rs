use super::*;

// =============================================================================
// env_bool: unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_LMS_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_LMS_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_missing_returns_none() {
    let key = "__TEST_LMS_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_LMS_EB_MISSING__"), None);
}

// =============================================================================
// PORT / LMS_API_URL / LMS_API_TIMEOUT_SECS
// =============================================================================

#[test]
fn parse_timeout_defaults_and_accepts_positive() {
    assert_eq!(parse_timeout(None), Ok(DEFAULT_API_TIMEOUT_SECS));
    assert_eq!(parse_timeout(Some(" ")), Ok(DEFAULT_API_TIMEOUT_SECS));
    assert_eq!(parse_timeout(Some(" 45 ")), Ok(45));
}

#[test]
fn parse_timeout_rejects_zero_and_garbage() {
    assert_eq!(parse_timeout(Some("0")), Err(ConfigError::InvalidTimeout("0".to_owned())));
    assert_eq!(parse_timeout(Some("soon")), Err(ConfigError::InvalidTimeout("soon".to_owned())));
    assert_eq!(parse_timeout(Some("-5")), Err(ConfigError::InvalidTimeout("-5".to_owned())));
}

#[test]
fn parse_port_defaults_and_validates() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn normalize_api_url_strips_trailing_slash() {
    assert_eq!(normalize_api_url(None), Ok(DEFAULT_API_URL.to_owned()));
    assert_eq!(normalize_api_url(Some("")), Ok(DEFAULT_API_URL.to_owned()));
    assert_eq!(
        normalize_api_url(Some("https://lms.example.com/")),
        Ok("https://lms.example.com".to_owned())
    );
}

#[test]
fn normalize_api_url_rejects_non_http() {
    assert_eq!(
        normalize_api_url(Some("lms.example.com")),
        Err(ConfigError::InvalidApiUrl("lms.example.com".to_owned()))
    );
}
