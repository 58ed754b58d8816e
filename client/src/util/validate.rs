//! Client-side pre-validation for form input.
//!
//! These mirror the input constraints the API enforces so obvious mistakes are
//! reported inline without a round trip. The server stays authoritative; any
//! rule it adds later still surfaces through its `detail` message.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{SubjectPayload, TaskPayload};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_SUBJECT_NAME_LEN: usize = 3;
pub const MIN_TASK_NAME_LEN: usize = 5;

fn check_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_owned());
    }
    Ok(())
}

/// # Errors
///
/// Returns the first problem found with the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    check_email(email.trim())?;
    if password.is_empty() {
        return Err("Password is required".to_owned());
    }
    Ok(())
}

/// # Errors
///
/// Returns the first problem found with the registration form.
pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    if username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(format!("Username must be at least {MIN_USERNAME_LEN} characters"));
    }
    check_email(email.trim())?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    Ok(())
}

/// `IK-` followed by three uppercase ASCII letters and three digits.
#[must_use]
pub fn is_valid_subject_code(code: &str) -> bool {
    let Some(rest) = code.strip_prefix("IK-") else {
        return false;
    };
    let bytes = rest.as_bytes();
    bytes.len() == 6
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

fn parse_positive(raw: &str, label: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        Ok(_) => Err(format!("{label} must be at least 1")),
        Err(_) => Err(format!("{label} must be a whole number")),
    }
}

/// Build a subject body from raw form fields. A blank description is sent as `null`.
///
/// # Errors
///
/// Returns the first invalid field's message.
pub fn subject_payload(name: &str, description: &str, code: &str, credits: &str) -> Result<SubjectPayload, String> {
    let name = name.trim();
    if name.chars().count() < MIN_SUBJECT_NAME_LEN {
        return Err(format!("Subject name must be at least {MIN_SUBJECT_NAME_LEN} characters"));
    }
    let code = code.trim();
    if !is_valid_subject_code(code) {
        return Err("Subject code must look like IK-ABC123".to_owned());
    }
    let credits = parse_positive(credits, "Credits")?;
    let description = description.trim();
    Ok(SubjectPayload {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        code: code.to_owned(),
        credits,
    })
}

/// # Errors
///
/// Returns the first invalid field's message.
pub fn task_payload(name: &str, description: &str, points: &str) -> Result<TaskPayload, String> {
    let name = name.trim();
    if name.chars().count() < MIN_TASK_NAME_LEN {
        return Err(format!("Task name must be at least {MIN_TASK_NAME_LEN} characters"));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err("Description is required".to_owned());
    }
    let points = parse_positive(points, "Points")?;
    Ok(TaskPayload { name: name.to_owned(), description: description.to_owned(), points })
}

/// # Errors
///
/// Returns a message when the solution text is blank.
pub fn solution_content(content: &str) -> Result<String, String> {
    if content.trim().is_empty() {
        return Err("Solution cannot be empty".to_owned());
    }
    Ok(content.to_owned())
}

/// Parse a grade and check it against the task's maximum.
///
/// With no known maximum only the lower bound is checked here; the server
/// still enforces the upper one.
///
/// # Errors
///
/// Returns a message when the value is not a number in `[0, max_points]`.
pub fn grade_points(raw: &str, max_points: Option<i64>) -> Result<i64, String> {
    let parsed = raw.trim().parse::<i64>().ok();
    match (parsed, max_points) {
        (Some(points), Some(max)) if (0..=max).contains(&points) => Ok(points),
        (Some(points), None) if points >= 0 => Ok(points),
        (_, Some(max)) => Err(format!("Points must be between 0 and {max}")),
        (_, None) => Err("Points must be 0 or more".to_owned()),
    }
}
