//! Record filtering.
//!
//! A record survives when all of these hold:
//! - the search text is found in `name`, or in `description` when present
//! - the language filter is empty, or equals `language` exactly
//! - `stars` and `forks` fall within their ranges
//!
//! Filtering keeps dataset order; ordering is the sort step's job.

use crate::model::{QueryState, Repository};
use crate::query::text::FoldedQuery;

/// Precompiled form of the filter part of a [`QueryState`].
#[derive(Debug, Clone)]
pub struct RecordFilter<'q> {
    needle: FoldedQuery,
    query: &'q QueryState,
}

impl<'q> RecordFilter<'q> {
    /// Compile the filter conditions of `query`.
    pub fn new(query: &'q QueryState) -> Self {
        Self {
            needle: FoldedQuery::new(&query.search_query),
            query,
        }
    }

    /// Whether `repo` satisfies every condition.
    pub fn matches(&self, repo: &Repository) -> bool {
        self.matches_text(repo) && self.matches_language(repo) && self.matches_ranges(repo)
    }

    /// Text condition. An absent description never matches a non-empty query.
    pub fn matches_text(&self, repo: &Repository) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.needle.is_found_in(&repo.name)
            || repo
                .description
                .as_deref()
                .is_some_and(|desc| self.needle.is_found_in(desc))
    }

    /// Language condition. Case-sensitive exact match.
    pub fn matches_language(&self, repo: &Repository) -> bool {
        let selected = self.query.selected_language.as_str();
        selected.is_empty() || repo.language.as_deref() == Some(selected)
    }

    /// Star/fork range condition.
    pub fn matches_ranges(&self, repo: &Repository) -> bool {
        self.query.stars.contains(repo.stars) && self.query.forks.contains(repo.forks)
    }
}

/// Indices of records in `records` that pass `query`, in dataset order.
pub fn filter_indices(records: &[Repository], query: &QueryState) -> Vec<usize> {
    let filter = RecordFilter::new(query);
    records
        .iter()
        .enumerate()
        .filter(|(_, repo)| filter.matches(repo))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records in `records` that pass `query`, in dataset order.
pub fn filter_records<'a>(records: &'a [Repository], query: &QueryState) -> Vec<&'a Repository> {
    let filter = RecordFilter::new(query);
    records.iter().filter(|repo| filter.matches(repo)).collect()
}
