//! Worked query examples against small fixtures and the built-in dataset.

use repolens::dataset;
use repolens::model::{CountRange, QueryState, Repository, SortKey, SortOrder, Timestamp};
use repolens::query::QueryEngine;

fn record(
    name: &str,
    description: Option<&str>,
    language: &str,
    stars: u64,
    forks: u64,
    created_at: &str,
    updated_at: &str,
) -> Repository {
    Repository {
        name: name.to_string(),
        description: description.map(str::to_string),
        language: Some(language.to_string()),
        stars,
        forks,
        created_at: Timestamp::parse(created_at),
        updated_at: Timestamp::parse(updated_at),
        url: format!("https://github.com/example/{}", name.to_lowercase()),
    }
}

fn alpha_beta() -> QueryEngine {
    QueryEngine::new(vec![
        record("Alpha", Some("fast cache"), "Go", 10, 2, "2020-01-01", "2021-01-01"),
        record("Beta", None, "Rust", 50, 1, "2019-01-01", "2022-01-01"),
    ])
}

fn names(engine: &QueryEngine, query: &QueryState) -> Vec<String> {
    engine
        .view(query)
        .into_iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn default_query_orders_by_stars_descending() {
    let engine = alpha_beta();
    let query = QueryState::default().sorted_by(SortKey::Stars, SortOrder::Descending);
    assert_eq!(names(&engine, &query), vec!["Beta", "Alpha"]);
}

#[test]
fn search_matches_description_only_where_present() {
    let engine = alpha_beta();
    let query = QueryState::default().with_search("cache");
    assert_eq!(names(&engine, &query), vec!["Alpha"]);
}

#[test]
fn language_filter_is_exact() {
    let engine = alpha_beta();
    assert_eq!(
        names(&engine, &QueryState::default().with_language("Rust")),
        vec!["Beta"]
    );
    assert!(names(&engine, &QueryState::default().with_language("rust")).is_empty());
}

#[test]
fn created_and_updated_sorts_disagree() {
    let engine = alpha_beta();
    let created = QueryState::default().sorted_by(SortKey::CreatedAt, SortOrder::Descending);
    let updated = QueryState::default().sorted_by(SortKey::UpdatedAt, SortOrder::Descending);
    assert_eq!(names(&engine, &created), vec!["Alpha", "Beta"]);
    assert_eq!(names(&engine, &updated), vec!["Beta", "Alpha"]);
}

#[test]
fn bounds_are_inclusive() {
    let engine = alpha_beta();
    let query = QueryState::default().with_stars(CountRange::new(Some(10), Some(10)));
    assert_eq!(names(&engine, &query), vec!["Alpha"]);

    let query = QueryState::default().with_forks(CountRange::new(None, Some(1)));
    assert_eq!(names(&engine, &query), vec!["Beta"]);
}

#[test]
fn builtin_rust_repositories_by_stars() {
    let engine = QueryEngine::new(dataset::load_embedded().expect("embedded dataset"));
    let query = QueryState::default().with_language("Rust");
    assert_eq!(
        names(&engine, &query),
        vec!["deno", "tauri", "rustdesk", "alacritty", "bat", "ripgrep"]
    );
}

#[test]
fn builtin_search_is_case_insensitive() {
    let engine = QueryEngine::new(dataset::load_embedded().expect("embedded dataset"));
    let lower = names(&engine, &QueryState::default().with_search("terminal"));
    let upper = names(&engine, &QueryState::default().with_search("TERMINAL"));
    assert_eq!(lower, upper);
    assert!(lower.contains(&"alacritty".to_string()));
    assert!(lower.contains(&"lazygit".to_string()));
}

#[test]
fn builtin_facet_covers_every_language_but_skips_missing() {
    let engine = QueryEngine::new(dataset::load_embedded().expect("embedded dataset"));
    let languages = engine.languages();
    assert_eq!(languages.first().map(String::as_str), Some("TypeScript"));
    assert!(languages.iter().any(|l| l == "Rust"));
    assert!(engine.records().iter().any(|r| r.language.is_none()));
    assert!(languages.iter().all(|l| !l.is_empty()));
}
