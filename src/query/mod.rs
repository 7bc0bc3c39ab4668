//! Repository query engine (pure core).
//!
//! Holds the immutable record set and derives every view from it:
//! `sort(filter(records, query))`. No state survives between calls except
//! the records themselves and the language facet computed from them.

pub mod facet;
pub mod filter;
pub mod highlight;
pub mod sort;
pub mod text;

pub use facet::language_facet;
pub use filter::{filter_indices, filter_records, RecordFilter};
pub use highlight::{highlight, highlight_folded, Fragment, FragmentKind};
pub use sort::{compare, sort_records};
pub use text::FoldedQuery;

use crate::model::{QueryState, Repository};
use tracing::debug;

/// In-memory query engine over the static dataset.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Vec<Repository>,
    languages: Vec<String>,
}

impl QueryEngine {
    /// Build an engine over `records`. The language facet is computed once here.
    pub fn new(records: Vec<Repository>) -> Self {
        let languages = language_facet(&records);
        Self { records, languages }
    }

    /// The full, unfiltered dataset in load order.
    pub fn records(&self) -> &[Repository] {
        &self.records
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct languages over the full dataset, in first-seen order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Record at `index` in dataset order.
    pub fn get(&self, index: usize) -> Option<&Repository> {
        self.records.get(index)
    }

    /// Dataset indices of the view for `query`, filtered then stably sorted.
    pub fn view_indices(&self, query: &QueryState) -> Vec<usize> {
        let mut indices = filter_indices(&self.records, query);
        sort::sort_indices(&mut indices, &self.records, query.sort_by, query.sort_order);
        debug!(
            search = %query.search_query,
            language = %query.selected_language,
            sort_by = %query.sort_by,
            sort_order = %query.sort_order,
            matched = indices.len(),
            total = self.records.len(),
            "Recomputed view"
        );
        indices
    }

    /// The view for `query`, filtered then stably sorted.
    pub fn view(&self, query: &QueryState) -> Vec<&Repository> {
        self.view_indices(query)
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }
}
