use super::*;

#[test]
fn all_endpoint_is_fixed() {
    assert_eq!(components_all_endpoint(), "/components/all");
}

#[test]
fn search_endpoint_encodes_the_query() {
    assert_eq!(
        components_search_endpoint("drop down"),
        "/components/search/drop%20down"
    );
}

#[test]
fn search_endpoint_passes_plain_queries_through() {
    assert_eq!(components_search_endpoint("dialog"), "/components/search/dialog");
}

#[test]
fn repo_file_endpoint_joins_segments() {
    assert_eq!(
        repo_file_endpoint("component", "dialog", "readme"),
        "/component/dialog/readme"
    );
}

#[test]
fn repo_file_endpoint_encodes_segments() {
    assert_eq!(
        repo_file_endpoint("a b", "c", "readme"),
        "/a%20b/c/readme"
    );
}
