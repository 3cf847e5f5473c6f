use super::*;

fn pkg(repo: &str) -> ComponentSummary {
    ComponentSummary {
        repo: repo.to_owned(),
        description: None,
        keywords: Vec::new(),
        license: None,
        stars: 0,
    }
}

// =============================================================
// classify_input
// =============================================================

#[test]
fn empty_input_clears() {
    assert_eq!(classify_input(""), InputAction::Clear);
    assert_eq!(classify_input("   "), InputAction::Clear);
}

#[test]
fn one_character_query_does_not_search() {
    assert_eq!(classify_input("d"), InputAction::Ignore);
    assert_eq!(classify_input(" d "), InputAction::Ignore);
}

#[test]
fn two_characters_search() {
    assert_eq!(classify_input("di"), InputAction::Search("di".to_owned()));
}

#[test]
fn query_is_trimmed_before_length_check() {
    assert_eq!(
        classify_input("  dialog  "),
        InputAction::Search("dialog".to_owned())
    );
}

#[test]
fn multibyte_input_counts_characters_not_bytes() {
    assert_eq!(classify_input("é"), InputAction::Ignore);
    assert_eq!(classify_input("éé"), InputAction::Search("éé".to_owned()));
}

// =============================================================
// begin/finish request
// =============================================================

#[test]
fn begin_request_marks_loading_and_clears_error() {
    let mut state = SearchState::default();
    state.error = Some(ErrorNotice {
        title: "t".to_owned(),
        message: "m".to_owned(),
    });

    let seq = state.begin_request();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(seq > 0);
}

#[test]
fn finish_applies_results() {
    let mut state = SearchState::default();
    let seq = state.begin_request();

    assert!(state.finish_request(seq, Ok(vec![pkg("a/b")])));
    assert!(!state.loading);
    assert_eq!(state.results.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn empty_results_render_the_error_view() {
    let mut state = SearchState::default();
    let seq = state.begin_request();

    assert!(state.finish_request(seq, Ok(Vec::new())));
    assert!(state.results.is_empty());
    assert_eq!(state.error.as_ref().unwrap().title, "No results");
}

#[test]
fn fetch_failure_renders_the_error_view() {
    let mut state = SearchState::default();
    state.results = vec![pkg("a/b")];
    let seq = state.begin_request();

    assert!(state.finish_request(seq, Err("boom".to_owned())));
    assert!(state.results.is_empty());
    assert_eq!(state.error.as_ref().unwrap().title, "Something went wrong");
}

#[test]
fn stale_response_is_dropped() {
    let mut state = SearchState::default();
    let first = state.begin_request();
    let _second = state.begin_request();

    // The first request resolves after the second began.
    assert!(!state.finish_request(first, Ok(vec![pkg("stale/stale")])));
    assert!(state.loading);
    assert!(state.results.is_empty());
}

#[test]
fn latest_response_still_applies_after_a_stale_one() {
    let mut state = SearchState::default();
    let first = state.begin_request();
    let second = state.begin_request();

    assert!(!state.finish_request(first, Ok(vec![pkg("stale/stale")])));
    assert!(state.finish_request(second, Ok(vec![pkg("fresh/fresh")])));
    assert_eq!(state.results[0].repo, "fresh/fresh");
}
