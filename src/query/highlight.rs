//! Highlight fragments for matched search text.
//!
//! A display string is split around case-insensitive occurrences of the
//! query. Each piece borrows from the original string, so concatenating the
//! fragment texts reproduces it exactly, capitalization included.

use crate::query::text::FoldedQuery;

/// Whether a fragment is ordinary text or a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Text outside any match.
    Plain,
    /// Text of one match, in its original capitalization.
    Matched,
}

/// A contiguous run of the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Slice of the original string.
    pub text: &'a str,
    /// Plain or matched.
    pub kind: FragmentKind,
}

impl<'a> Fragment<'a> {
    /// Plain fragment.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            kind: FragmentKind::Plain,
        }
    }

    /// Matched fragment.
    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            kind: FragmentKind::Matched,
        }
    }

    /// Whether this fragment is a search hit.
    pub fn is_matched(&self) -> bool {
        self.kind == FragmentKind::Matched
    }
}

/// Split `text` into plain and matched fragments for `query`.
///
/// Empty `query` or empty `text` yields `text` as a single plain fragment.
/// Otherwise empty plain runs (between adjacent matches, or at either end)
/// are omitted.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Fragment<'a>> {
    if query.is_empty() || text.is_empty() {
        return vec![Fragment::plain(text)];
    }
    highlight_folded(text, &FoldedQuery::new(query))
}

/// Like [`highlight`] with a pre-folded query, for rendering many records.
pub fn highlight_folded<'a>(text: &'a str, query: &FoldedQuery) -> Vec<Fragment<'a>> {
    if query.is_empty() || text.is_empty() {
        return vec![Fragment::plain(text)];
    }

    let ranges = query.match_ranges(text);
    if ranges.is_empty() {
        return vec![Fragment::plain(text)];
    }

    let mut fragments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            fragments.push(Fragment::plain(&text[cursor..range.start]));
        }
        fragments.push(Fragment::matched(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() {
        fragments.push(Fragment::plain(&text[cursor..]));
    }

    fragments
}

/// Concatenate fragment texts back into one string.
pub fn join(fragments: &[Fragment<'_>]) -> String {
    fragments.iter().map(|f| f.text).collect()
}
