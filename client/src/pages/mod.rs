//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its fetches and form state. Protected pages are wrapped in
//! `RouteGuard` by the router, so they can assume a signed-in user.

pub mod browse_subjects;
pub mod forms;
pub mod home;
pub mod login;
pub mod register;
pub mod student_dashboard;
pub mod student_subject_details;
pub mod subject_details;
pub mod submit_solution;
pub mod task_solutions;
pub mod teacher_dashboard;
