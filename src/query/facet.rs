//! Language facet derived from the full dataset.

use crate::model::Repository;
use std::collections::HashSet;

/// Distinct non-empty languages across `records`, in first-seen order.
///
/// Always computed over the whole dataset, never the filtered view, so the
/// facet list does not shrink as filters narrow the results.
pub fn language_facet(records: &[Repository]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(Repository::language)
        .filter(|lang| seen.insert(*lang))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timestamp;

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            language: language.map(str::to_string),
            stars: 0,
            forks: 0,
            created_at: Timestamp::parse("2020-01-01"),
            updated_at: Timestamp::parse("2020-01-01"),
            url: String::new(),
        }
    }

    #[test]
    fn facet_is_distinct_in_first_seen_order() {
        let records = vec![
            repo("a", Some("Rust")),
            repo("b", Some("Go")),
            repo("c", Some("Rust")),
            repo("d", Some("C")),
        ];
        assert_eq!(language_facet(&records), vec!["Rust", "Go", "C"]);
    }

    #[test]
    fn facet_skips_missing_and_empty_languages() {
        let records = vec![repo("a", None), repo("b", Some("")), repo("c", Some("Go"))];
        assert_eq!(language_facet(&records), vec!["Go"]);
    }

    #[test]
    fn facet_is_case_sensitive() {
        let records = vec![repo("a", Some("rust")), repo("b", Some("Rust"))];
        assert_eq!(language_facet(&records), vec!["rust", "Rust"]);
    }

    #[test]
    fn facet_of_empty_dataset_is_empty() {
        assert!(language_facet(&[]).is_empty());
    }
}
