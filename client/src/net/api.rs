//! REST API helpers for the remote LMS service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin through
//! the host server's `/api` pass-through.
//! Server-side (SSR): stubs returning `ApiError::Network` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are classified
//! by `ApiError::from_response`; callers turn them into inline messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    EvaluationPayload, LoginRequest, NewSolutionPayload, NewTaskPayload, RegisterRequest, Solution, Subject,
    SubjectDetail, SubjectPayload, Task, TaskPayload, TaskWithStats, TokenResponse, User,
};

// =============================================================================
// PATHS
// =============================================================================

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const ME_PATH: &str = "/api/auth/me";
const TEACHER_SUBJECTS_PATH: &str = "/api/teacher/subjects";
const STUDENT_SUBJECTS_PATH: &str = "/api/student/subjects";
const STUDENT_MY_SUBJECTS_PATH: &str = "/api/student/my-subjects";

fn teacher_subject_path(subject_id: i64) -> String {
    format!("/api/teacher/subjects/{subject_id}")
}

fn teacher_subject_tasks_path(subject_id: i64) -> String {
    format!("/api/teacher/subjects/{subject_id}/tasks")
}

fn teacher_task_path(task_id: i64) -> String {
    format!("/api/teacher/tasks/{task_id}")
}

fn teacher_task_solutions_path(task_id: i64) -> String {
    format!("/api/teacher/tasks/{task_id}/solutions")
}

fn evaluate_solution_path(solution_id: i64) -> String {
    format!("/api/teacher/solutions/{solution_id}/evaluate")
}

fn enroll_path(subject_id: i64) -> String {
    format!("/api/student/subjects/{subject_id}/enroll")
}

fn leave_path(subject_id: i64) -> String {
    format!("/api/student/subjects/{subject_id}/leave")
}

fn student_subject_tasks_path(subject_id: i64) -> String {
    format!("/api/student/subjects/{subject_id}/tasks")
}

fn submit_solution_path(task_id: i64) -> String {
    format!("/api/student/tasks/{task_id}/submit")
}

fn my_solutions_path(task_id: i64) -> String {
    format!("/api/student/tasks/{task_id}/my-solutions")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn encode_body<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one request and return the raw response body on success.
async fn send(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
            Method::Delete => Request::delete(path),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::warn!("{method:?} {path} failed with status {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

async fn call<T: DeserializeOwned>(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let text = send(method, path, token, body).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like `call`, for endpoints whose success body is empty or ignored.
async fn call_empty(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    send(method, path, token, body).await.map(|_| ())
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the classified API error when credentials are rejected or the
/// request fails.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let body = encode_body(&LoginRequest { email: email.to_owned(), password: password.to_owned() })?;
    call(Method::Post, LOGIN_PATH, None, Some(body)).await
}

/// Create an account via `POST /api/auth/register`. Does not sign in.
///
/// # Errors
///
/// Returns the classified API error (for example a duplicate email).
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    call(Method::Post, REGISTER_PATH, None, Some(encode_body(request)?)).await
}

/// Fetch the identity behind `token` from `/api/auth/me`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for an expired or unknown token.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    call(Method::Get, ME_PATH, Some(token), None).await
}

// =============================================================================
// TEACHER
// =============================================================================

/// # Errors
///
/// Returns the classified API error.
pub async fn list_teacher_subjects(token: &str) -> Result<Vec<Subject>, ApiError> {
    call(Method::Get, TEACHER_SUBJECTS_PATH, Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error (for example a duplicate code).
pub async fn create_subject(token: &str, payload: &SubjectPayload) -> Result<Subject, ApiError> {
    call(Method::Post, TEACHER_SUBJECTS_PATH, Some(token), Some(encode_body(payload)?)).await
}

/// Subject with its enrolled students.
///
/// # Errors
///
/// Returns the classified API error.
pub async fn fetch_teacher_subject(token: &str, subject_id: i64) -> Result<SubjectDetail, ApiError> {
    call(Method::Get, &teacher_subject_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn update_subject(token: &str, subject_id: i64, payload: &SubjectPayload) -> Result<Subject, ApiError> {
    call(Method::Put, &teacher_subject_path(subject_id), Some(token), Some(encode_body(payload)?)).await
}

/// Soft-delete a subject. The API answers `204 No Content`.
///
/// # Errors
///
/// Returns the classified API error.
pub async fn delete_subject(token: &str, subject_id: i64) -> Result<(), ApiError> {
    call_empty(Method::Delete, &teacher_subject_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn list_teacher_tasks(token: &str, subject_id: i64) -> Result<Vec<Task>, ApiError> {
    call(Method::Get, &teacher_subject_tasks_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn create_task(token: &str, subject_id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
    let body = encode_body(&NewTaskPayload { task: payload.clone(), subject_id })?;
    call(Method::Post, &teacher_subject_tasks_path(subject_id), Some(token), Some(body)).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn fetch_task_with_stats(token: &str, task_id: i64) -> Result<TaskWithStats, ApiError> {
    call(Method::Get, &teacher_task_path(task_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn update_task(token: &str, task_id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
    call(Method::Put, &teacher_task_path(task_id), Some(token), Some(encode_body(payload)?)).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn list_task_solutions(token: &str, task_id: i64) -> Result<Vec<Solution>, ApiError> {
    call(Method::Get, &teacher_task_solutions_path(task_id), Some(token), None).await
}

/// Award `points_earned` to a solution. Range checks are the server's.
///
/// # Errors
///
/// Returns the classified API error.
pub async fn evaluate_solution(token: &str, solution_id: i64, points_earned: i64) -> Result<Solution, ApiError> {
    let body = encode_body(&EvaluationPayload { points_earned })?;
    call(Method::Post, &evaluate_solution_path(solution_id), Some(token), Some(body)).await
}

// =============================================================================
// STUDENT
// =============================================================================

/// Every subject visible to students.
///
/// # Errors
///
/// Returns the classified API error.
pub async fn list_all_subjects(token: &str) -> Result<Vec<Subject>, ApiError> {
    call(Method::Get, STUDENT_SUBJECTS_PATH, Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn list_enrolled_subjects(token: &str) -> Result<Vec<Subject>, ApiError> {
    call(Method::Get, STUDENT_MY_SUBJECTS_PATH, Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error (for example "Already enrolled").
pub async fn enroll(token: &str, subject_id: i64) -> Result<(), ApiError> {
    call_empty(Method::Post, &enroll_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn leave(token: &str, subject_id: i64) -> Result<(), ApiError> {
    call_empty(Method::Delete, &leave_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn list_student_tasks(token: &str, subject_id: i64) -> Result<Vec<Task>, ApiError> {
    call(Method::Get, &student_subject_tasks_path(subject_id), Some(token), None).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn submit_solution(token: &str, task_id: i64, content: &str) -> Result<Solution, ApiError> {
    let body = encode_body(&NewSolutionPayload { content: content.to_owned(), task_id })?;
    call(Method::Post, &submit_solution_path(task_id), Some(token), Some(body)).await
}

/// # Errors
///
/// Returns the classified API error.
pub async fn list_my_solutions(token: &str, task_id: i64) -> Result<Vec<Solution>, ApiError> {
    call(Method::Get, &my_solutions_path(task_id), Some(token), None).await
}
