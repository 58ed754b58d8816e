use super::*;

#[test]
fn default_is_loading_without_data() {
    let view = ViewState::<Vec<i64>>::default();
    assert!(view.loading);
    assert!(view.data.is_none());
    assert!(view.error.is_none());
    assert_eq!(view.reload_seq, 0);
}

#[test]
fn finish_ok_stores_data_and_stops_loading() {
    let mut view = ViewState::default();
    view.begin_load();
    view.finish(Ok(vec![1, 2, 3]));
    assert!(!view.loading);
    assert_eq!(view.data, Some(vec![1, 2, 3]));
}

#[test]
fn finish_err_keeps_previous_data() {
    let mut view = ViewState::default();
    view.finish(Ok(vec![1]));
    view.begin_load();
    view.finish(Err("Failed to load subjects".to_owned()));
    assert!(!view.loading);
    assert_eq!(view.data, Some(vec![1]));
    assert_eq!(view.error.as_deref(), Some("Failed to load subjects"));
}

#[test]
fn refresh_after_mutation_bumps_seq_and_reloads_quietly() {
    let mut view = ViewState::default();
    view.finish(Ok(vec![1]));
    view.invalidate();
    assert_eq!(view.reload_seq, 1);

    view.begin_load();
    assert!(!view.loading, "refresh keeps existing rows on screen");
    view.finish(Ok(vec![1, 2]));
    assert_eq!(view.data, Some(vec![1, 2]));
}

#[test]
fn begin_load_clears_stale_error() {
    let mut view = ViewState::<Vec<i64>>::default();
    view.finish(Err("boom".to_owned()));
    view.begin_load();
    assert!(view.error.is_none());
    assert!(view.loading);
}

#[test]
fn late_answer_to_older_request_is_dropped() {
    let mut view = ViewState::<Vec<i64>>::default();
    let first = view.begin_load();
    let second = view.begin_load();
    assert_ne!(first, second);

    assert!(view.finish_request(second, Ok(vec![2])));
    assert!(!view.finish_request(first, Ok(vec![1])));
    assert_eq!(view.data, Some(vec![2]));
    assert!(!view.loading);
}

#[test]
fn stale_failure_does_not_mask_fresh_data() {
    let mut view = ViewState::<Vec<i64>>::default();
    let stale = view.begin_load();
    let fresh = view.begin_load();
    assert!(!view.finish_request(stale, Err("Failed to load tasks".to_owned())));
    assert!(view.error.is_none());
    assert!(view.loading);
    assert!(view.finish_request(fresh, Ok(vec![5])));
    assert_eq!(view.data, Some(vec![5]));
}
