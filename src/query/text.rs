//! Case-insensitive literal matching shared by filter and highlight.
//!
//! Folding is per character: a character folds to its lowercase form when
//! that form is a single character, and to itself otherwise (e.g. `İ`, whose
//! lowercase is two characters). This keeps a 1:1 mapping between folded
//! and original characters, so every match range lands on character
//! boundaries of the original string and filter and highlight agree on what
//! matches.

use std::ops::Range;

/// Fold one character for comparison.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// A search needle folded once, reused across every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedQuery {
    chars: Vec<char>,
}

impl FoldedQuery {
    /// Fold `query` for matching.
    pub fn new(query: &str) -> Self {
        Self {
            chars: query.chars().map(fold_char).collect(),
        }
    }

    /// Whether the needle is empty (matches everything in filtering).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `haystack` contains the needle. An empty needle is always found.
    pub fn is_found_in(&self, haystack: &str) -> bool {
        if self.chars.is_empty() {
            return true;
        }
        let folded: Vec<char> = haystack.chars().map(fold_char).collect();
        folded
            .windows(self.chars.len())
            .any(|window| window == self.chars.as_slice())
    }

    /// Byte ranges of non-overlapping matches in `haystack`, left to right.
    ///
    /// Empty needle yields no ranges.
    pub fn match_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let n = self.chars.len();
        if n == 0 {
            return ranges;
        }

        let folded: Vec<(usize, char)> = haystack
            .char_indices()
            .map(|(idx, c)| (idx, fold_char(c)))
            .collect();

        let mut i = 0;
        while i + n <= folded.len() {
            let hit = folded[i..i + n]
                .iter()
                .map(|(_, c)| *c)
                .eq(self.chars.iter().copied());
            if hit {
                let start = folded[i].0;
                let end = folded.get(i + n).map_or(haystack.len(), |(idx, _)| *idx);
                ranges.push(start..end);
                i += n;
            } else {
                i += 1;
            }
        }

        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_char_lowercases_ascii() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('z'), 'z');
        assert_eq!(fold_char('7'), '7');
    }

    #[test]
    fn fold_char_keeps_multi_char_lowercase_as_is() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(fold_char('İ'), 'İ');
    }

    #[test]
    fn empty_query_is_found_everywhere() {
        let q = FoldedQuery::new("");
        assert!(q.is_empty());
        assert!(q.is_found_in(""));
        assert!(q.is_found_in("anything"));
        assert!(q.match_ranges("anything").is_empty());
    }

    #[test]
    fn found_in_is_case_insensitive() {
        let q = FoldedQuery::new("CaChE");
        assert!(q.is_found_in("fast cache"));
        assert!(q.is_found_in("CACHE layer"));
        assert!(!q.is_found_in("cach"));
    }

    #[test]
    fn match_ranges_are_non_overlapping() {
        let q = FoldedQuery::new("aa");
        assert_eq!(q.match_ranges("aaaa"), vec![0..2, 2..4]);
        assert_eq!(q.match_ranges("aaa"), vec![0..2]);
    }

    #[test]
    fn match_ranges_respect_multibyte_boundaries() {
        let q = FoldedQuery::new("仓库");
        let text = "GitHub 仓库浏览器";
        let ranges = q.match_ranges(text);
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "仓库");
    }

    #[test]
    fn match_ranges_map_back_to_original_case() {
        let q = FoldedQuery::new("é");
        let text = "CAFÉ café";
        let matched: Vec<&str> = q.match_ranges(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(matched, vec!["É", "é"]);
    }

    #[test]
    fn needle_longer_than_haystack_never_matches() {
        let q = FoldedQuery::new("longer");
        assert!(!q.is_found_in("long"));
        assert!(q.match_ranges("long").is_empty());
    }
}
