use super::*;

#[test]
fn teacher_paths_embed_ids() {
    assert_eq!(teacher_subject_path(4), "/api/teacher/subjects/4");
    assert_eq!(teacher_subject_tasks_path(4), "/api/teacher/subjects/4/tasks");
    assert_eq!(teacher_task_path(11), "/api/teacher/tasks/11");
    assert_eq!(teacher_task_solutions_path(11), "/api/teacher/tasks/11/solutions");
    assert_eq!(evaluate_solution_path(23), "/api/teacher/solutions/23/evaluate");
}

#[test]
fn student_paths_embed_ids() {
    assert_eq!(enroll_path(5), "/api/student/subjects/5/enroll");
    assert_eq!(leave_path(5), "/api/student/subjects/5/leave");
    assert_eq!(student_subject_tasks_path(5), "/api/student/subjects/5/tasks");
    assert_eq!(submit_solution_path(9), "/api/student/tasks/9/submit");
    assert_eq!(my_solutions_path(9), "/api/student/tasks/9/my-solutions");
}

#[test]
fn collection_paths_are_fixed() {
    assert_eq!(LOGIN_PATH, "/api/auth/login");
    assert_eq!(REGISTER_PATH, "/api/auth/register");
    assert_eq!(ME_PATH, "/api/auth/me");
    assert_eq!(TEACHER_SUBJECTS_PATH, "/api/teacher/subjects");
    assert_eq!(STUDENT_SUBJECTS_PATH, "/api/student/subjects");
    assert_eq!(STUDENT_MY_SUBJECTS_PATH, "/api/student/my-subjects");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn encode_body_produces_wire_json() {
    let body = encode_body(&EvaluationPayload { points_earned: 7 }).unwrap();
    assert_eq!(body, serde_json::json!({ "points_earned": 7 }));
}
