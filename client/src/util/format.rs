//! Display formatting for timestamps and scores.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Anything that does not look like `YYYY-MM-DDTHH:MM...` is shown unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once(['T', ' ']) else {
        return raw.to_owned();
    };
    match time.get(..5) {
        Some(hm) if date.len() == 10 && hm.as_bytes()[2] == b':' => format!("{date} {hm}"),
        _ => raw.to_owned(),
    }
}

/// Optional timestamp with a placeholder for missing values.
#[must_use]
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map_or_else(|| "-".to_owned(), format_timestamp)
}

/// Teacher-side grade label, e.g. `Evaluated: 7/10 points`.
#[must_use]
pub fn evaluated_label(points_earned: i64, max_points: Option<i64>) -> String {
    match max_points {
        Some(max) => format!("Evaluated: {points_earned}/{max} points"),
        None => format!("Evaluated: {points_earned} points"),
    }
}

/// Student-side score label.
#[must_use]
pub fn score_label(points_earned: Option<i64>) -> String {
    match points_earned {
        Some(points) => format!("Score: {points} points"),
        None => "Not evaluated yet".to_owned(),
    }
}

/// Grading progress for a task, e.g. `3 of 5 evaluated`.
#[must_use]
pub fn grading_progress(evaluated: i64, total: i64) -> String {
    format!("{evaluated} of {total} evaluated")
}
