use super::*;

#[test]
fn format_timestamp_trims_seconds_and_fraction() {
    assert_eq!(format_timestamp("2025-03-01T12:30:45.123456"), "2025-03-01 12:30");
    assert_eq!(format_timestamp("2025-03-01T08:05:00Z"), "2025-03-01 08:05");
    assert_eq!(format_timestamp("2025-03-01 08:05:00"), "2025-03-01 08:05");
}

#[test]
fn format_timestamp_passes_through_unknown_shapes() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2025-3-1T1:2"), "2025-3-1T1:2");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn optional_timestamp_uses_placeholder() {
    assert_eq!(format_optional_timestamp(None), "-");
    assert_eq!(format_optional_timestamp(Some("2025-03-01T12:30:45")), "2025-03-01 12:30");
}

#[test]
fn score_labels() {
    assert_eq!(evaluated_label(7, Some(10)), "Evaluated: 7/10 points");
    assert_eq!(evaluated_label(7, None), "Evaluated: 7 points");
    assert_eq!(score_label(Some(0)), "Score: 0 points");
    assert_eq!(score_label(None), "Not evaluated yet");
    assert_eq!(grading_progress(3, 5), "3 of 5 evaluated");
}
