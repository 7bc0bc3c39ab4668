//! Property-based tests for query engine and locale invariants.
//!
//! Tests validate:
//! 1. A record is in the view iff it passes the text and language conditions
//! 2. Joining highlight fragments reproduces the input
//! 3. Sorting is deterministic and reversing the order reverses non-ties
//! 4. The language facet is complete and duplicate-free
//! 5. Missing locale keys come back unchanged

use proptest::prelude::*;
use repolens::i18n::{t, Locale};
use repolens::model::{QueryState, Repository, SortKey, SortOrder, Timestamp};
use repolens::query::sort::compare_by_key;
use repolens::query::{highlight, language_facet, FragmentKind, QueryEngine};
use std::collections::HashSet;

// ===== Strategies =====

fn arb_language() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Go".to_string())),
        Just(Some("Rust".to_string())),
        Just(Some("rust".to_string())),
        Just(Some("C".to_string())),
    ]
}

fn arb_date() -> impl Strategy<Value = Timestamp> {
    prop_oneof![
        (2010i32..2025, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| Timestamp::parse(format!("{y:04}-{m:02}-{d:02}"))),
        Just(Timestamp::parse("not a date")),
    ]
}

fn arb_repository() -> impl Strategy<Value = Repository> {
    (
        "[a-cA-C]{1,6}",
        proptest::option::of("[a-cA-C ]{0,12}"),
        arb_language(),
        0u64..100,
        0u64..100,
        arb_date(),
        arb_date(),
    )
        .prop_map(
            |(name, description, language, stars, forks, created_at, updated_at)| Repository {
                url: format!("https://github.com/example/{name}"),
                name,
                description,
                language,
                stars,
                forks,
                created_at,
                updated_at,
            },
        )
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

fn arb_query() -> impl Strategy<Value = QueryState> {
    (
        "[a-cA-C ]{0,3}",
        prop_oneof![Just(String::new()), Just("Go".to_string()), Just("Rust".to_string())],
        arb_sort_key(),
        arb_sort_order(),
    )
        .prop_map(|(search, language, key, order)| {
            QueryState::default()
                .with_search(search)
                .with_language(language)
                .sorted_by(key, order)
        })
}

/// Straightforward statement of the match conditions, for ASCII input.
fn reference_matches(repo: &Repository, query: &QueryState) -> bool {
    let needle = query.search_query.to_lowercase();
    let text = needle.is_empty()
        || repo.name.to_lowercase().contains(&needle)
        || repo
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
    let language = query.selected_language.is_empty()
        || repo.language.as_deref() == Some(query.selected_language.as_str());
    text && language
}

// ===== Property 1: Filter Correctness =====

proptest! {
    #[test]
    fn view_contains_exactly_the_matching_records(
        records in prop::collection::vec(arb_repository(), 0..20),
        query in arb_query(),
    ) {
        let engine = QueryEngine::new(records.clone());
        let indices: HashSet<usize> = engine.view_indices(&query).into_iter().collect();

        for (idx, repo) in records.iter().enumerate() {
            prop_assert_eq!(
                indices.contains(&idx),
                reference_matches(repo, &query),
                "record {} ({:?}) misclassified for {:?}",
                idx,
                repo.name,
                query.search_query
            );
        }
    }

    #[test]
    fn view_has_no_duplicates(
        records in prop::collection::vec(arb_repository(), 0..20),
        query in arb_query(),
    ) {
        let engine = QueryEngine::new(records);
        let indices = engine.view_indices(&query);
        let unique: HashSet<usize> = indices.iter().copied().collect();
        prop_assert_eq!(unique.len(), indices.len());
    }
}

// ===== Property 2: Highlight Round-Trip =====

proptest! {
    #[test]
    fn highlight_fragments_join_to_original(text in any::<String>(), query in any::<String>()) {
        let joined: String = highlight(&text, &query).iter().map(|f| f.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn highlight_matches_fold_to_query(text in "[a-zA-Z ]{0,30}", query in "[a-zA-Z]{1,3}") {
        for fragment in highlight(&text, &query) {
            if fragment.is_matched() {
                prop_assert_eq!(fragment.text.to_lowercase(), query.to_lowercase());
            }
        }
    }

    #[test]
    fn highlight_with_empty_query_is_one_plain_fragment(text in ".{1,30}") {
        let fragments = highlight(&text, "");
        prop_assert_eq!(fragments.len(), 1);
        prop_assert_eq!(fragments[0].kind, FragmentKind::Plain);
    }
}

// ===== Property 3: Sort Determinism & Reversal =====

proptest! {
    #[test]
    fn sorting_twice_gives_the_same_order(
        records in prop::collection::vec(arb_repository(), 0..20),
        query in arb_query(),
    ) {
        let engine = QueryEngine::new(records);
        prop_assert_eq!(engine.view_indices(&query), engine.view_indices(&query));
    }

    #[test]
    fn reversing_order_reverses_non_tied_pairs(
        records in prop::collection::vec(arb_repository(), 0..20),
        key in arb_sort_key(),
    ) {
        let engine = QueryEngine::new(records);
        let desc = engine.view_indices(&QueryState::default().sorted_by(key, SortOrder::Descending));
        let asc = engine.view_indices(&QueryState::default().sorted_by(key, SortOrder::Ascending));

        let position = |view: &[usize], idx: usize| view.iter().position(|i| *i == idx);
        let record = |idx: usize| &engine.records()[idx];

        for (i, &a) in desc.iter().enumerate() {
            for &b in &desc[i + 1..] {
                let tied = compare_by_key(record(a), record(b), key)
                    == std::cmp::Ordering::Equal;
                if !tied {
                    prop_assert!(position(&asc, b) < position(&asc, a));
                }
            }
        }
    }

    #[test]
    fn ties_keep_dataset_order(
        records in prop::collection::vec(arb_repository(), 0..20),
        key in arb_sort_key(),
        order in arb_sort_order(),
    ) {
        let engine = QueryEngine::new(records);
        let view = engine.view_indices(&QueryState::default().sorted_by(key, order));
        for pair in view.windows(2) {
            let (a, b) = (&engine.records()[pair[0]], &engine.records()[pair[1]]);
            if compare_by_key(a, b, key) == std::cmp::Ordering::Equal {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}

// ===== Property 4: Facet Completeness =====

proptest! {
    #[test]
    fn facet_lists_every_language_once(records in prop::collection::vec(arb_repository(), 0..30)) {
        let facet = language_facet(&records);

        let unique: HashSet<&String> = facet.iter().collect();
        prop_assert_eq!(unique.len(), facet.len(), "facet has duplicates: {:?}", facet);

        let expected: HashSet<String> = records
            .iter()
            .filter_map(|r| r.language.clone())
            .filter(|l| !l.is_empty())
            .collect();
        let actual: HashSet<String> = facet.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn facet_ignores_active_filters(
        records in prop::collection::vec(arb_repository(), 0..20),
        query in arb_query(),
    ) {
        let engine = QueryEngine::new(records.clone());
        let _ = engine.view_indices(&query);
        let expected = language_facet(&records);
        prop_assert_eq!(engine.languages(), expected.as_slice());
    }
}

// ===== Property 5: Locale Fallback =====

proptest! {
    #[test]
    fn missing_key_is_returned_unchanged(key in "zz\\.[a-z]{1,10}(\\.[a-z]{1,5})?") {
        for locale in Locale::all() {
            prop_assert_eq!(t(*locale, &key), key.as_str());
        }
    }
}
