use super::*;

fn subject(id: i64, code: &str) -> Subject {
    Subject {
        id,
        name: format!("Subject {id}"),
        description: None,
        code: code.to_owned(),
        credits: 5,
        teacher_id: 1,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn enrolled_ids_marks_membership() {
    let all = vec![subject(1, "IK-AAA111"), subject(2, "IK-BBB222"), subject(3, "IK-CCC333")];
    let mine = vec![subject(2, "IK-BBB222")];
    let ids = enrolled_ids(&mine);
    let flags: Vec<bool> = all.iter().map(|s| ids.contains(&s.id)).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn find_subject_by_id() {
    let mine = vec![subject(4, "IK-DDD444"), subject(9, "IK-EEE555")];
    assert_eq!(find_subject(&mine, 9).map(|s| s.code.as_str()), Some("IK-EEE555"));
    assert!(find_subject(&mine, 5).is_none());
    assert!(find_subject(&[], 1).is_none());
}

#[test]
fn parse_id_accepts_only_integers() {
    assert_eq!(parse_id(Some("42".to_owned())), Some(42));
    assert_eq!(parse_id(Some("abc".to_owned())), None);
    assert_eq!(parse_id(None), None);
}
