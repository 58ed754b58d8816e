use super::*;

fn solution(points_earned: Option<i64>) -> Solution {
    Solution {
        id: 1,
        content: "answer".to_owned(),
        task_id: 2,
        student_id: 3,
        points_earned,
        submitted_at: None,
        evaluated_at: None,
    }
}

#[test]
fn initial_grade_starts_from_zero_or_existing_score() {
    assert_eq!(initial_grade(&solution(None)), "0");
    assert_eq!(initial_grade(&solution(Some(8))), "8");
}

#[test]
fn points_hint_shows_range_only_when_max_is_known() {
    assert_eq!(points_hint(Some(10)), "Points (0-10)");
    assert_eq!(points_hint(None), "Points");
}
