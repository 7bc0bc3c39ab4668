//! Query state: the user-controlled parameters that define the visible list.
//!
//! The visible list is always `sort(filter(records, query))`. Nothing else
//! feeds into it, so a `QueryState` value fully describes a view.

use crate::model::error::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ===== SortKey =====

/// Field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Stargazer count.
    #[default]
    Stars,
    /// Fork count.
    Forks,
    /// Creation timestamp.
    CreatedAt,
    /// Last update timestamp.
    UpdatedAt,
}

impl SortKey {
    /// All keys in control order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Stars,
        SortKey::Forks,
        SortKey::CreatedAt,
        SortKey::UpdatedAt,
    ];

    /// Wire name, as accepted by `--sort` and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::CreatedAt => "created_at",
            SortKey::UpdatedAt => "updated_at",
        }
    }

    /// Locale key for the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            SortKey::Stars => "sortOptions.stars",
            SortKey::Forks => "sortOptions.forks",
            SortKey::CreatedAt => "sortOptions.createdAt",
            SortKey::UpdatedAt => "sortOptions.updatedAt",
        }
    }

    /// Next key, wrapping from last to first.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous key, wrapping from first to last.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseValueError::SortKey(s.to_string()))
    }
}

// ===== SortOrder =====

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest / oldest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest / newest first.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Wire name (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Locale key for the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            SortOrder::Ascending => "sortOrder.asc",
            SortOrder::Descending => "sortOrder.desc",
        }
    }

    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(ParseValueError::SortOrder(other.to_string())),
        }
    }
}

// ===== CountRange =====

/// Inclusive bounds on a count field. `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountRange {
    /// Lower bound, inclusive.
    pub min: Option<u64>,
    /// Upper bound, inclusive.
    pub max: Option<u64>,
}

impl CountRange {
    /// Range with the given bounds.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(&self, value: u64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

// ===== QueryState =====

/// The user-controlled parameters of the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    /// Committed search text. Empty matches every record.
    pub search_query: String,
    /// Exact language filter. Empty means no language filter.
    pub selected_language: String,
    /// Field to order by.
    pub sort_by: SortKey,
    /// Direction to order in.
    pub sort_order: SortOrder,
    /// Bounds on star count.
    pub stars: CountRange,
    /// Bounds on fork count.
    pub forks: CountRange,
}

impl QueryState {
    /// Set the search text.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set the language filter. Pass `""` to clear it.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.selected_language = language.into();
        self
    }

    /// Set sort key and direction.
    pub fn sorted_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    /// Set star bounds.
    pub fn with_stars(mut self, range: CountRange) -> Self {
        self.stars = range;
        self
    }

    /// Set fork bounds.
    pub fn with_forks(mut self, range: CountRange) -> Self {
        self.forks = range;
        self
    }

    /// Whether any filter (text, language, or range) is active.
    pub fn has_filters(&self) -> bool {
        !self.search_query.is_empty()
            || !self.selected_language.is_empty()
            || !self.stars.is_unbounded()
            || !self.forks.is_unbounded()
    }

    /// Drop all filters, keeping the sort parameters.
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.selected_language.clear();
        self.stars = CountRange::default();
        self.forks = CountRange::default();
    }
}
