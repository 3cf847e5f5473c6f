use super::*;

fn summary(repo: &str) -> ComponentSummary {
    ComponentSummary {
        repo: repo.to_owned(),
        description: None,
        keywords: Vec::new(),
        license: None,
        stars: 0,
    }
}

#[test]
fn user_and_name_split_the_slug() {
    let pkg = summary("component/dialog");
    assert_eq!(pkg.user(), "component");
    assert_eq!(pkg.name(), "dialog");
}

#[test]
fn slug_without_slash_degrades_gracefully() {
    let pkg = summary("dialog");
    assert_eq!(pkg.user(), "dialog");
    assert_eq!(pkg.name(), "dialog");
}

#[test]
fn urls_derive_from_the_slug() {
    let pkg = summary("component/dialog");
    assert_eq!(pkg.github_url(), "https://github.com/component/dialog");
    assert_eq!(pkg.page_path(), "/component/dialog");
}

#[test]
fn description_fallback_applies_to_missing_and_blank() {
    let mut pkg = summary("a/b");
    assert_eq!(pkg.description_text(), "No description.");
    pkg.description = Some("   ".to_owned());
    assert_eq!(pkg.description_text(), "No description.");
    pkg.description = Some("Modal dialog".to_owned());
    assert_eq!(pkg.description_text(), "Modal dialog");
}

#[test]
fn license_fallback_applies_to_missing() {
    let mut pkg = summary("a/b");
    assert_eq!(pkg.license_text(), "None");
    pkg.license = Some("MIT".to_owned());
    assert_eq!(pkg.license_text(), "MIT");
}

#[test]
fn summary_deserializes_with_defaults() {
    let pkg: ComponentSummary = serde_json::from_str(r#"{"repo":"a/b"}"#).unwrap();
    assert_eq!(pkg.repo, "a/b");
    assert_eq!(pkg.stars, 0);
    assert!(pkg.keywords.is_empty());
    assert!(pkg.description.is_none());
    assert!(pkg.license.is_none());
}
