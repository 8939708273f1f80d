//! Document name matching strategies.
//!
//! The filter engine decides which documents survive a query through the
//! [`DocumentMatcher`] trait. Two strategies exist:
//!
//! - [`SubstringMatcher`] (default): case-insensitive, unanchored substring
//!   containment. `"setup"` matches `"Advanced Setup"`, `"adv set"` does not.
//! - [`FuzzyMatcher`]: Skim-style fuzzy matching over whitespace-separated
//!   tokens, enabled with `match_mode "fuzzy"`.
//!
//! Both report the character ranges they matched so the list can highlight
//! them. Ranges are `(start, end)` character indices with an exclusive end.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher as _;

/// Decides whether a document name matches a query.
pub trait DocumentMatcher {
    /// Returns `true` if `name` satisfies `query`. An empty query matches
    /// every name.
    fn is_match(&self, name: &str, query: &str) -> bool;

    /// Character ranges of `name` covered by `query`, for highlighting.
    ///
    /// Returns an empty vector when the query is empty or does not match.
    fn highlight_ranges(&self, name: &str, query: &str) -> Vec<(usize, usize)>;
}

/// Which [`DocumentMatcher`] the plugin filters with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Skim fuzzy matching over whitespace-separated tokens.
    Fuzzy,
}

impl MatchMode {
    /// Parses a configuration value. Unknown values yield `None`.
    ///
    /// ```
    /// use docnav::domain::MatchMode;
    ///
    /// assert_eq!(MatchMode::parse("fuzzy"), Some(MatchMode::Fuzzy));
    /// assert_eq!(MatchMode::parse(" Substring "), Some(MatchMode::Substring));
    /// assert_eq!(MatchMode::parse("regex"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }

    #[must_use]
    pub fn matcher(self) -> Box<dyn DocumentMatcher> {
        match self {
            Self::Substring => Box::new(SubstringMatcher),
            Self::Fuzzy => Box::new(FuzzyMatcher::default()),
        }
    }
}

/// Case-insensitive substring containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl DocumentMatcher for SubstringMatcher {
    fn is_match(&self, name: &str, query: &str) -> bool {
        name.to_lowercase().contains(&query.to_lowercase())
    }

    fn highlight_ranges(&self, name: &str, query: &str) -> Vec<(usize, usize)> {
        if query.is_empty() {
            return vec![];
        }

        let name_lower = name.to_lowercase();
        // Lowercasing can change the character count for a few scripts; the
        // ranges would then point at the wrong characters of `name`.
        if name_lower.chars().count() != name.chars().count() {
            return vec![];
        }

        let query_lower = query.to_lowercase();
        name_lower
            .find(&query_lower)
            .map(|byte_start| {
                let start = name_lower[..byte_start].chars().count();
                vec![(start, start + query_lower.chars().count())]
            })
            .unwrap_or_default()
    }
}

/// Skim fuzzy matching; every whitespace-separated token must match.
#[derive(Default)]
pub struct FuzzyMatcher {
    skim: SkimMatcherV2,
}

impl std::fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyMatcher").finish_non_exhaustive()
    }
}

impl DocumentMatcher for FuzzyMatcher {
    fn is_match(&self, name: &str, query: &str) -> bool {
        let name_lower = name.to_lowercase();
        query
            .split_whitespace()
            .map(str::to_lowercase)
            .all(|token| self.skim.fuzzy_match(&name_lower, &token).is_some())
    }

    fn highlight_ranges(&self, name: &str, query: &str) -> Vec<(usize, usize)> {
        let mut indices: Vec<usize> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .filter_map(|token| self.skim.fuzzy_indices(name, &token))
            .flat_map(|(_score, indices)| indices)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        coalesce_indices(&indices)
    }
}

/// Collapses sorted character indices into contiguous `(start, end)` runs.
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_is_case_insensitive_and_unanchored() {
        let m = SubstringMatcher;
        assert!(m.is_match("Advanced Setup", "setup"));
        assert!(m.is_match("Advanced Setup", "NCED S"));
        assert!(m.is_match("Intro", ""));
        assert!(!m.is_match("Intro", "intro guide"));
        assert!(!m.is_match("Advanced Setup", "adv set"));
    }

    #[test]
    fn substring_highlights_first_occurrence() {
        let m = SubstringMatcher;
        assert_eq!(m.highlight_ranges("Advanced Setup", "setup"), vec![(9, 14)]);
        assert_eq!(m.highlight_ranges("abcabc", "BC"), vec![(1, 3)]);
        assert!(m.highlight_ranges("Intro", "").is_empty());
        assert!(m.highlight_ranges("Intro", "zzz").is_empty());
    }

    #[test]
    fn substring_highlight_counts_characters_not_bytes() {
        let m = SubstringMatcher;
        assert_eq!(m.highlight_ranges("Über Docs", "docs"), vec![(5, 9)]);
    }

    #[test]
    fn fuzzy_requires_every_token() {
        let m = FuzzyMatcher::default();
        assert!(m.is_match("Advanced Setup", "adv set"));
        assert!(m.is_match("Advanced Setup", "avsp"));
        assert!(!m.is_match("Advanced Setup", "adv xyz"));
        assert!(m.is_match("Anything", "   "));
    }

    #[test]
    fn fuzzy_highlights_are_coalesced() {
        let m = FuzzyMatcher::default();
        let ranges = m.highlight_ranges("Advanced Setup", "adv");
        assert_eq!(ranges, vec![(0, 3)]);
    }

    #[test]
    fn coalesce_merges_adjacent_runs() {
        assert_eq!(coalesce_indices(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_indices(&[]).is_empty());
    }

    #[test]
    fn match_mode_defaults_to_substring() {
        assert_eq!(MatchMode::default(), MatchMode::Substring);
        assert!(MatchMode::Substring.matcher().is_match("Intro", "TRO"));
        assert!(!MatchMode::Substring.matcher().is_match("Intro", "itr"));
        assert!(MatchMode::Fuzzy.matcher().is_match("Intro", "itr"));
    }
}
