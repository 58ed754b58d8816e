//! Membership lookups over already-fetched subject lists.

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

use std::collections::HashSet;

use crate::net::types::Subject;

#[must_use]
pub fn enrolled_ids(enrolled: &[Subject]) -> HashSet<i64> {
    enrolled.iter().map(|s| s.id).collect()
}

#[must_use]
pub fn find_subject(subjects: &[Subject], id: i64) -> Option<&Subject> {
    subjects.iter().find(|s| s.id == id)
}

/// Parse a numeric route parameter.
#[must_use]
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}
