use super::*;

// =============================================================
// Literal templates
// =============================================================

#[test]
fn root_matches_slash() {
    let pattern = Pattern::compile("/").unwrap();
    assert!(pattern.match_path("/").is_some());
}

#[test]
fn root_rejects_other_paths() {
    let pattern = Pattern::compile("/").unwrap();
    assert!(pattern.match_path("/search").is_none());
}

#[test]
fn literal_template_matches_exactly() {
    let pattern = Pattern::compile("/about").unwrap();
    assert!(pattern.match_path("/about").is_some());
    assert!(pattern.match_path("/about/team").is_none());
    assert!(pattern.match_path("/abou").is_none());
}

#[test]
fn literal_tolerates_one_trailing_slash() {
    let pattern = Pattern::compile("/about").unwrap();
    assert!(pattern.match_path("/about/").is_some());
    assert!(pattern.match_path("/about//").is_none());
}

#[test]
fn literal_regex_metacharacters_are_escaped() {
    let pattern = Pattern::compile("/a.b").unwrap();
    assert!(pattern.match_path("/a.b").is_some());
    assert!(pattern.match_path("/axb").is_none());
}

// =============================================================
// Named parameters
// =============================================================

#[test]
fn named_param_captures_segment() {
    let pattern = Pattern::compile("/search/:query").unwrap();
    let params = pattern.match_path("/search/dom").unwrap();
    assert_eq!(params.get("query"), Some("dom"));
}

#[test]
fn named_param_rejects_missing_segment() {
    let pattern = Pattern::compile("/search/:query").unwrap();
    assert!(pattern.match_path("/search").is_none());
    assert!(pattern.match_path("/search/").is_none());
}

#[test]
fn named_param_does_not_cross_slashes() {
    let pattern = Pattern::compile("/search/:query").unwrap();
    assert!(pattern.match_path("/search/a/b").is_none());
}

#[test]
fn two_params_capture_in_template_order() {
    let pattern = Pattern::compile("/:user/:repo").unwrap();
    let params = pattern.match_path("/component/dialog").unwrap();
    assert_eq!(params.get("user"), Some("component"));
    assert_eq!(params.get("repo"), Some("dialog"));
    assert_eq!(params.len(), 2);
}

#[test]
fn params_iterate_in_template_order() {
    let pattern = Pattern::compile("/:user/:repo").unwrap();
    let params = pattern.match_path("/a/b").unwrap();
    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("user", "a"), ("repo", "b")]);
}

#[test]
fn percent_encoded_values_are_decoded() {
    let pattern = Pattern::compile("/search/:query").unwrap();
    let params = pattern.match_path("/search/drop%20down").unwrap();
    assert_eq!(params.get("query"), Some("drop down"));
}

#[test]
fn undecodable_value_falls_back_to_raw() {
    let pattern = Pattern::compile("/search/:query").unwrap();
    // %FF alone is not valid UTF-8 after decoding.
    let params = pattern.match_path("/search/%FF").unwrap();
    assert_eq!(params.get("query"), Some("%FF"));
}

// =============================================================
// Optional parameters
// =============================================================

#[test]
fn optional_param_matches_with_and_without_segment() {
    let pattern = Pattern::compile("/commits/:sha?").unwrap();

    let without = pattern.match_path("/commits").unwrap();
    assert_eq!(without.get("sha"), None);
    assert!(without.is_empty());

    let with = pattern.match_path("/commits/abc123").unwrap();
    assert_eq!(with.get("sha"), Some("abc123"));
}

#[test]
fn optional_param_absorbs_its_leading_slash() {
    let pattern = Pattern::compile("/commits/:sha?").unwrap();
    // A bare trailing slash is the trailing-slash tolerance, not a value.
    let params = pattern.match_path("/commits/").unwrap();
    assert_eq!(params.get("sha"), None);
}

// =============================================================
// Splat
// =============================================================

#[test]
fn trailing_splat_captures_rest() {
    let pattern = Pattern::compile("/files/*").unwrap();
    let params = pattern.match_path("/files/a/b/c.txt").unwrap();
    assert_eq!(params.get(SPLAT_KEY), Some("a/b/c.txt"));
}

#[test]
fn bare_splat_matches_everything() {
    let pattern = Pattern::compile("*").unwrap();
    assert!(pattern.match_path("/anything/at/all").is_some());
}

// =============================================================
// Case handling
// =============================================================

#[test]
fn matching_is_case_insensitive_by_default() {
    let pattern = Pattern::compile("/Search/:query").unwrap();
    assert!(pattern.match_path("/search/dom").is_some());
}

#[test]
fn case_sensitive_compilation_respects_case() {
    let pattern = Pattern::compile_with_case("/Search/:query", true).unwrap();
    assert!(pattern.match_path("/Search/dom").is_some());
    assert!(pattern.match_path("/search/dom").is_none());
}

// =============================================================
// Compile errors
// =============================================================

#[test]
fn empty_param_name_is_rejected() {
    assert!(matches!(
        Pattern::compile("/:"),
        Err(PatternError::EmptyParamName(_))
    ));
}

#[test]
fn duplicate_param_name_is_rejected() {
    assert!(matches!(
        Pattern::compile("/:id/:id"),
        Err(PatternError::DuplicateParam(_, _))
    ));
}
