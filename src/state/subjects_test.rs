use super::*;
use crate::net::types::ReviewState;

fn subject(id: i64) -> SubjectStatus {
    SubjectStatus {
        id,
        subject: format!("did:plc:subject-{id}"),
        subject_repo_handle: None,
        created_at: None,
        last_reviewed_at: None,
        last_reported_at: None,
        comment: None,
        review_state: ReviewState::Open,
    }
}

fn page(ids: &[i64], cursor: Option<&str>) -> SubjectStatusPage {
    SubjectStatusPage {
        subject_statuses: ids.iter().copied().map(subject).collect(),
        cursor: cursor.map(str::to_owned),
    }
}

fn ids(state: &SubjectListState) -> Vec<i64> {
    state.items.iter().map(|s| s.id).collect()
}

// =============================================================
// lifecycle flags
// =============================================================

#[test]
fn default_is_empty_and_idle() {
    let state = SubjectListState::default();
    assert!(state.items.is_empty());
    assert!(!state.initial_loading);
    assert!(!state.show_load_more());
}

#[test]
fn begin_reload_clears_rows_and_marks_loading() {
    let mut state = SubjectListState::default();
    state.apply_page(page(&[1, 2], Some("c1")));
    state.begin_reload();
    assert!(state.items.is_empty());
    assert!(state.initial_loading);
    assert!(state.cursor.is_none());
}

#[test]
fn loading_and_empty_states_are_mutually_exclusive() {
    let mut state = SubjectListState::default();
    state.begin_reload();
    assert!(state.initial_loading);
    state.finish_without_page();
    assert!(!state.initial_loading);
    assert!(state.items.is_empty());
}

// =============================================================
// row order
// =============================================================

#[test]
fn rows_match_input_order() {
    let mut state = SubjectListState::default();
    state.apply_page(page(&[5, 1, 9], None));
    assert_eq!(ids(&state), vec![5, 1, 9]);
}

#[test]
fn apply_more_appends_in_order() {
    let mut state = SubjectListState::default();
    state.apply_page(page(&[1, 2], Some("c1")));
    state.apply_more(page(&[3, 4], Some("c2")));
    assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    assert_eq!(state.cursor.as_deref(), Some("c2"));
}

// =============================================================
// load-more visibility
// =============================================================

#[test]
fn load_more_shown_only_with_cursor() {
    let mut state = SubjectListState::default();
    state.apply_page(page(&[1], Some("c1")));
    assert!(state.show_load_more());

    state.apply_more(page(&[2], None));
    assert!(!state.show_load_more());
}

#[test]
fn load_more_hidden_while_initial_loading() {
    let mut state = SubjectListState::default();
    state.apply_page(page(&[1], Some("c1")));
    state.begin_reload();
    assert!(!state.show_load_more());
}
