use super::*;

fn ingest(json: &str) -> Vec<ComponentSummary> {
    let feed: CrawlerFeed = serde_json::from_str(json).unwrap();
    feed.into_components()
}

#[test]
fn well_formed_rows_survive() {
    let components = ingest(
        r#"{
            "users": ["component"],
            "components": [
                {"repo": "component/dialog", "description": "Modal dialog", "license": "MIT", "stars": 120, "keywords": ["ui", "dialog"]}
            ]
        }"#,
    );
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].repo, "component/dialog");
    assert_eq!(components[0].stars, 120);
    assert_eq!(components[0].keywords, vec!["ui", "dialog"]);
}

#[test]
fn trailing_null_rows_are_dropped() {
    let components = ingest(r#"{"components": [{"repo": "a/b"}, null, null]}"#);
    assert_eq!(components.len(), 1);
}

#[test]
fn rows_without_a_repo_are_dropped() {
    let components = ingest(r#"{"components": [{"description": "orphan"}, {"repo": "a/b"}]}"#);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].repo, "a/b");
}

#[test]
fn repo_falls_back_to_github_full_name() {
    let components = ingest(r#"{"components": [{"github": {"full_name": "component/menu"}}]}"#);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].repo, "component/menu");
}

#[test]
fn stars_fall_back_to_stargazers_count() {
    let components = ingest(
        r#"{"components": [{"repo": "a/b", "github": {"stargazers_count": 77}}]}"#,
    );
    assert_eq!(components[0].stars, 77);
}

#[test]
fn explicit_stars_win_over_nested_count() {
    let components = ingest(
        r#"{"components": [{"repo": "a/b", "stars": 5, "github": {"stargazers_count": 77}}]}"#,
    );
    assert_eq!(components[0].stars, 5);
}

#[test]
fn slug_without_slash_is_dropped() {
    let components = ingest(r#"{"components": [{"repo": "not-a-slug"}]}"#);
    assert!(components.is_empty());
}

#[test]
fn slug_whitespace_and_slashes_are_trimmed() {
    let components = ingest(r#"{"components": [{"repo": " component/menu/ "}]}"#);
    assert_eq!(components[0].repo, "component/menu");
}

#[test]
fn empty_document_yields_empty_catalog() {
    assert!(ingest("{}").is_empty());
}
