//! Wire DTOs for the remote LMS API.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON schemas field for field. The server owns
//! validation, so optional/defaulted fields are lenient on decode and the
//! client never derives entity state of its own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Role flag as decided by the server. Client routing uses it for convenience
/// only; it is never a security boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Landing route for this role.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Teacher => "/teacher",
            Self::Student => "/student",
        }
    }

    /// Human-readable portal label shown in the navigation bar.
    #[must_use]
    pub fn portal_label(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher Portal",
            Self::Student => "Student Portal",
        }
    }
}

/// An authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_teacher: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn role(&self) -> Role {
        if self.is_teacher { Role::Teacher } else { Role::Student }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Bearer token issued by `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

// =============================================================================
// SUBJECTS
// =============================================================================

/// A course owned by a teacher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub code: String,
    pub credits: i64,
    pub teacher_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Teacher-side subject detail including the enrolled student list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDetail {
    #[serde(flatten)]
    pub subject: Subject,
    #[serde(default)]
    pub students: Vec<User>,
}

/// Body for subject create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectPayload {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
    pub credits: i64,
}

// =============================================================================
// TASKS
// =============================================================================

/// A gradable assignment within a subject. `points` is the maximum award.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub points: i64,
    pub subject_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Teacher-side task detail with submission counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithStats {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub total_solutions: i64,
    #[serde(default)]
    pub evaluated_solutions: i64,
}

/// Body for task update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub name: String,
    pub description: String,
    pub points: i64,
}

/// Body for task create; the API wants the owning subject repeated in the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTaskPayload {
    #[serde(flatten)]
    pub task: TaskPayload,
    pub subject_id: i64,
}

// =============================================================================
// SOLUTIONS
// =============================================================================

/// A student's submission. `points_earned` stays `None` until graded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: i64,
    pub content: String,
    pub task_id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub points_earned: Option<i64>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub evaluated_at: Option<String>,
}

impl Solution {
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.points_earned.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSolutionPayload {
    pub content: String,
    pub task_id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EvaluationPayload {
    pub points_earned: i64,
}
